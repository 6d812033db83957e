use serde::{Deserialize, Serialize};

/// The slice of the remote chain's transaction object the connector
/// consumes: its content hash and its position within the block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction hash as reported by the chain, `0x`-prefixed hex.
    pub hash: String,
    /// Position of the transaction within its block.
    pub transaction_index: u64,
    /// Height of the enclosing block.
    pub block_number: u64,
}
