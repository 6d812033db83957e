//! Canonical handling of hex quantity strings as the remote chain reports
//! them. Quantities arrive with or without the `0x` prefix depending on the
//! RPC path; everything that feeds a hash must go through the canonical form
//! here first.

use crate::error::ApiError;

/// Strips a leading `0x`/`0X` marker, if any.
pub fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}

/// Canonical quantity form: `0x`-prefixed lowercase hex with no leading
/// zeros. `"0x0"` for zero. Accepts prefixed and bare inputs alike, so two
/// spellings of the same value always canonicalize identically.
pub fn normalize_quantity(raw: &str) -> String {
    let digits = strip_hex_prefix(raw).trim_start_matches('0');
    if digits.is_empty() {
        return "0x0".to_string();
    }
    format!("0x{}", digits.to_lowercase())
}

/// Minimal big-endian byte form of a hex quantity, as the RLP integer
/// convention consumes it. Zero is the empty byte string.
pub fn quantity_bytes(raw: &str) -> Result<Vec<u8>, ApiError> {
    let normalized = normalize_quantity(raw);
    let digits = strip_hex_prefix(&normalized);
    if digits == "0" {
        return Ok(Vec::new());
    }
    let padded = if digits.len() % 2 == 1 {
        format!("0{digits}")
    } else {
        digits.to_string()
    };
    hex::decode(padded).map_err(|e| ApiError::InvalidQuantity {
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
