//! Verification of cross-chain evidence: a transaction and its execution
//! receipt are accepted only if both fold back to the trusted roots of the
//! block that claims to contain them.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use bcos_apis::{strip_hex_prefix, Receipt, Transaction};

use crate::error::MerkleError;
use crate::hash::keccak;
use crate::proof::Proof;

/// A transaction plus the authentication path tying it to its block, as the
/// transport collaborator delivers them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionWithProof {
    pub transaction: Transaction,
    pub proof: Proof,
}

/// A receipt plus the authentication path tying it to its block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptWithProof {
    pub receipt: Receipt,
    pub proof: Proof,
}

/// Leaf value for an artifact: canonical RLP of its block position followed
/// by its content hash. Recomputed for every verification call.
pub fn leaf_input(index: u64, content_hash: &[u8]) -> Vec<u8> {
    let mut leaf = alloy_rlp::encode(index);
    leaf.extend_from_slice(content_hash);
    leaf
}

/// Verifies both halves of a cross-chain evidence pair.
///
/// Both checks are always attempted so operators get a mismatch log for
/// each artifact; the result is the logical AND.
pub fn verify(
    transaction_root: &str,
    receipt_root: &str,
    transaction: &TransactionWithProof,
    receipt: &ReceiptWithProof,
) -> Result<bool, MerkleError> {
    let transaction_ok =
        verify_transaction(transaction_root, &transaction.transaction, &transaction.proof)?;
    let receipt_ok = verify_receipt(receipt_root, &receipt.receipt, &receipt.proof)?;
    Ok(transaction_ok && receipt_ok)
}

/// Checks that a transaction is included in the block whose transaction
/// root the caller already trusts.
///
/// Returns `Ok(false)` on a root mismatch; malformed proofs, roots, and
/// artifacts surface as [`MerkleError`] so callers can tell an integrity
/// failure from a protocol bug.
pub fn verify_transaction(
    transaction_root: &str,
    transaction: &Transaction,
    proof: &Proof,
) -> Result<bool, MerkleError> {
    let content_hash =
        hex::decode(strip_hex_prefix(&transaction.hash)).map_err(|e| MerkleError::ArtifactNotHex {
            reason: e.to_string(),
        })?;
    let leaf = leaf_input(transaction.transaction_index, &content_hash);
    let computed = proof.compute_root(&leaf)?;
    compare_roots(
        "transaction",
        &transaction.hash,
        transaction.transaction_index,
        transaction_root,
        proof,
        &computed,
    )
}

/// Checks that a receipt is included in the block whose receipt root the
/// caller already trusts.
///
/// The leaf content hash is keccak-256 over the receipt's canonical RLP
/// serialization, so the gas-used normalization in
/// [`Receipt::canonical_rlp`] makes the check independent of how the field
/// was spelled on arrival.
pub fn verify_receipt(
    receipt_root: &str,
    receipt: &Receipt,
    proof: &Proof,
) -> Result<bool, MerkleError> {
    let serialized = receipt.canonical_rlp()?;
    let content_hash = keccak(&serialized);
    let leaf = leaf_input(receipt.transaction_index, &content_hash);
    let computed = proof.compute_root(&leaf)?;
    compare_roots(
        "receipt",
        &receipt.transaction_hash,
        receipt.transaction_index,
        receipt_root,
        proof,
        &computed,
    )
}

fn compare_roots(
    kind: &str,
    artifact_hash: &str,
    index: u64,
    trusted_root: &str,
    proof: &Proof,
    computed: &[u8],
) -> Result<bool, MerkleError> {
    let trusted = strip_hex_prefix(trusted_root).to_lowercase();
    hex::decode(&trusted).map_err(|e| MerkleError::RootNotHex {
        reason: e.to_string(),
    })?;
    let computed_hex = hex::encode(computed);

    debug!(
        "{} hash: {}, index: {}, root: {}, computed: 0x{}",
        kind, artifact_hash, index, trusted_root, computed_hex
    );

    if proof.path.is_empty() && computed_hex != trusted {
        return Err(MerkleError::EmptyPathMismatch);
    }

    let verify_ok = computed_hex == trusted;
    if !verify_ok {
        warn!(
            "{} verify failed, hash: {}, index: {}, root: {}, computed: 0x{}",
            kind, artifact_hash, index, trusted_root, computed_hex
        );
    }
    Ok(verify_ok)
}
