use alloy_rlp::Header;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::quantity::{normalize_quantity, quantity_bytes, strip_hex_prefix};

/// Execution receipt as delivered by the remote chain's RPC, reduced to the
/// fields the connector consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub transaction_hash: String,
    pub transaction_index: u64,
    /// Post-state root reported by the chain.
    pub root: String,
    /// Execution status code. `"0x0"` is the canonical success value.
    pub status: String,
    /// Gas consumed by the execution. May arrive with or without the `0x`
    /// prefix depending on the RPC path.
    pub gas_used: String,
    pub contract_address: String,
    pub logs_bloom: String,
    /// Call data of the executed transaction.
    pub input: String,
    /// Return data of the executed call. Only meaningful when the status
    /// reports success.
    pub output: String,
}

impl Receipt {
    /// Canonical RLP serialization used for inclusion-proof leaf hashing.
    ///
    /// The gas-used field is reduced to its canonical `0x`-prefixed quantity
    /// form before serialization, so a receipt hashes identically whether or
    /// not the transport delivered the field already prefixed. The receipt
    /// itself is left untouched.
    pub fn canonical_rlp(&self) -> Result<Vec<u8>, ApiError> {
        let gas_used = normalize_quantity(&self.gas_used);
        let items = [
            rlp_hex_item("root", &self.root)?,
            rlp_quantity_item("status", &self.status)?,
            rlp_quantity_item("gasUsed", &gas_used)?,
            rlp_hex_item("contractAddress", &self.contract_address)?,
            rlp_hex_item("logsBloom", &self.logs_bloom)?,
            rlp_hex_item("output", &self.output)?,
        ];
        let payload_length = items.iter().map(Vec::len).sum();
        let mut out = Vec::with_capacity(payload_length + 9);
        Header {
            list: true,
            payload_length,
        }
        .encode(&mut out);
        for item in &items {
            out.extend_from_slice(item);
        }
        Ok(out)
    }
}

fn rlp_hex_item(field: &'static str, value: &str) -> Result<Vec<u8>, ApiError> {
    let bytes = hex::decode(strip_hex_prefix(value)).map_err(|e| ApiError::FieldNotHex {
        field,
        reason: e.to_string(),
    })?;
    Ok(alloy_rlp::encode(bytes.as_slice()))
}

fn rlp_quantity_item(field: &'static str, value: &str) -> Result<Vec<u8>, ApiError> {
    let bytes = quantity_bytes(value).map_err(|e| match e {
        ApiError::InvalidQuantity { reason, .. } => ApiError::FieldNotHex { field, reason },
        other => other,
    })?;
    Ok(alloy_rlp::encode(bytes.as_slice()))
}
