mod error;
mod hash;
mod proof;
mod verifier;

pub use self::error::MerkleError;
pub use self::hash::{keccak, pair_hash};
pub use self::proof::{Position, Proof, ProofNode};
pub use self::verifier::{
    leaf_input, verify, verify_receipt, verify_transaction, ReceiptWithProof,
    TransactionWithProof,
};
