use rand::RngCore;

use bcos_apis::{strip_hex_prefix, Receipt, Transaction};
use bcos_merkle::{
    keccak, leaf_input, pair_hash, Position, Proof, ProofNode, ReceiptWithProof,
    TransactionWithProof,
};

/// Generate random bytes of specified length using the provided RNG
pub fn gen_random_bytes<R: RngCore>(rng: &mut R, len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);
    bytes
}

/// Generate a random 32-byte hash as a `0x`-prefixed hex string
pub fn gen_random_hash<R: RngCore>(rng: &mut R) -> String {
    format!("0x{}", hex::encode(gen_random_bytes(rng, 32)))
}

/// Generate a random transaction at the given block position
pub fn gen_random_transaction<R: RngCore>(rng: &mut R, index: u64) -> Transaction {
    Transaction {
        hash: gen_random_hash(rng),
        transaction_index: index,
        block_number: 1 + (rng.next_u64() % 1_000_000),
    }
}

/// Generate a random successful receipt at the given block position
pub fn gen_random_receipt<R: RngCore>(rng: &mut R, index: u64) -> Receipt {
    Receipt {
        transaction_hash: gen_random_hash(rng),
        transaction_index: index,
        root: gen_random_hash(rng),
        status: "0x0".to_string(),
        gas_used: format!("0x{:x}", 21_000 + (rng.next_u64() % 1_000_000)),
        contract_address: format!("0x{}", hex::encode(gen_random_bytes(rng, 20))),
        logs_bloom: format!("0x{}", hex::encode(gen_random_bytes(rng, 256))),
        input: "0x".to_string(),
        output: "0x".to_string(),
    }
}

/// In-memory Merkle tree over pre-built leaf values, producing the
/// authentication paths a correctly-behaving peer would serve.
///
/// Parents hash their children with the same pair hashing the verifier
/// folds with; a node without a sibling is promoted to the next level
/// unchanged, so its path simply skips that level.
pub struct TestTree {
    levels: Vec<Vec<Vec<u8>>>,
}

impl TestTree {
    pub fn build(leaves: Vec<Vec<u8>>) -> Self {
        assert!(!leaves.is_empty(), "a tree needs at least one leaf");
        let mut levels = vec![leaves];
        while levels.last().unwrap().len() > 1 {
            let prev = levels.last().unwrap();
            let mut next = Vec::with_capacity((prev.len() + 1) / 2);
            for pair in prev.chunks(2) {
                match pair {
                    [left, right] => next.push(pair_hash(left, right)),
                    [lone] => next.push(lone.clone()),
                    _ => unreachable!(),
                }
            }
            levels.push(next);
        }
        TestTree { levels }
    }

    pub fn root_hex(&self) -> String {
        hex::encode(&self.levels.last().unwrap()[0])
    }

    /// Authentication path for the leaf at `index`, leaf level first.
    pub fn proof_for(&self, index: usize) -> Proof {
        let mut path = Vec::new();
        let mut idx = index;
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = idx ^ 1;
            if sibling < level.len() {
                path.push(ProofNode {
                    hash: hex::encode(&level[sibling]),
                    position: if sibling < idx {
                        Position::Left
                    } else {
                        Position::Right
                    },
                });
            }
            idx /= 2;
        }
        Proof { path }
    }
}

/// Build a block of `total` random transactions; returns the transaction
/// root and each transaction bundled with its authentication path.
pub fn gen_transaction_block<R: RngCore>(
    rng: &mut R,
    total: u64,
) -> (String, Vec<TransactionWithProof>) {
    let transactions: Vec<Transaction> =
        (0..total).map(|i| gen_random_transaction(rng, i)).collect();
    let leaves = transactions
        .iter()
        .map(|tx| {
            let content_hash = hex::decode(strip_hex_prefix(&tx.hash)).unwrap();
            leaf_input(tx.transaction_index, &content_hash)
        })
        .collect();
    let tree = TestTree::build(leaves);
    let root = tree.root_hex();
    let with_proofs = transactions
        .into_iter()
        .enumerate()
        .map(|(i, transaction)| TransactionWithProof {
            transaction,
            proof: tree.proof_for(i),
        })
        .collect();
    (root, with_proofs)
}

/// Build a block of `total` random receipts; returns the receipt root and
/// each receipt bundled with its authentication path.
pub fn gen_receipt_block<R: RngCore>(rng: &mut R, total: u64) -> (String, Vec<ReceiptWithProof>) {
    let receipts: Vec<Receipt> = (0..total).map(|i| gen_random_receipt(rng, i)).collect();
    let leaves = receipts
        .iter()
        .map(|receipt| {
            let content_hash = keccak(&receipt.canonical_rlp().unwrap());
            leaf_input(receipt.transaction_index, &content_hash)
        })
        .collect();
    let tree = TestTree::build(leaves);
    let root = tree.root_hex();
    let with_proofs = receipts
        .into_iter()
        .enumerate()
        .map(|(i, receipt)| ReceiptWithProof {
            receipt,
            proof: tree.proof_for(i),
        })
        .collect();
    (root, with_proofs)
}
