use alloy_dyn_abi::{DynSolType, DynSolValue};

use bcos_apis::{strip_hex_prefix, ExecutionOutcome, Receipt};

use crate::call::METHOD_ID_LEN;
use crate::error::CodecError;

const WORD_LEN: usize = 32;

/// Decodes a call's input data back into its argument strings.
///
/// Returns `None` when there is nothing to decode: empty data, the bare
/// `0x` marker, or a method identifier with no parameter bytes behind it
/// (a zero-parameter call). An empty argument list decodes to `Some` of an
/// empty sequence; undecodable parameter bytes are a [`CodecError`].
pub fn decode_input(data: &str) -> Result<Option<Vec<String>>, CodecError> {
    let digits = strip_hex_prefix(data);
    if digits.is_empty() {
        return Ok(None);
    }
    let bytes = hex::decode(digits).map_err(|e| CodecError::NotHex(e.to_string()))?;
    if bytes.len() <= METHOD_ID_LEN {
        return Ok(None);
    }
    decode_string_list(&bytes[METHOD_ID_LEN..]).map(Some)
}

/// Decodes a call's return data, gated on the execution status.
///
/// Non-success outcomes yield `None` unconditionally: their output bytes
/// carry failure data, not the declared return types. Successful output may
/// arrive with or without the method identifier copied over from the input;
/// a `string[]` parameter encoding is always a multiple of 32 bytes, so a
/// length of 4 mod 32 marks the prefixed form. Both forms decode
/// identically.
pub fn decode_output(outcome: &ExecutionOutcome) -> Result<Option<Vec<String>>, CodecError> {
    if !outcome.status.is_success() {
        return Ok(None);
    }
    let digits = strip_hex_prefix(&outcome.output);
    if digits.is_empty() {
        return Ok(None);
    }
    let bytes = hex::decode(digits).map_err(|e| CodecError::NotHex(e.to_string()))?;
    let params = if bytes.len() % WORD_LEN == METHOD_ID_LEN {
        &bytes[METHOD_ID_LEN..]
    } else {
        &bytes[..]
    };
    if params.len() < WORD_LEN {
        return Ok(None);
    }
    decode_string_list(params).map(Some)
}

/// Decodes the call input straight off an execution receipt.
pub fn decode_receipt_input(receipt: &Receipt) -> Result<Option<Vec<String>>, CodecError> {
    decode_input(&receipt.input)
}

/// Decodes the call output straight off an execution receipt, honoring its
/// status.
pub fn decode_receipt_output(receipt: &Receipt) -> Result<Option<Vec<String>>, CodecError> {
    decode_output(&ExecutionOutcome::from(receipt))
}

fn decode_string_list(params: &[u8]) -> Result<Vec<String>, CodecError> {
    let list_type = DynSolType::Tuple(vec![DynSolType::Array(Box::new(DynSolType::String))]);
    let decoded = list_type
        .abi_decode_params(params)
        .map_err(|e| CodecError::Abi(e.to_string()))?;
    let DynSolValue::Tuple(mut fields) = decoded else {
        return Err(CodecError::Abi("expected a single string[] parameter".to_string()));
    };
    let Some(DynSolValue::Array(items)) = fields.pop() else {
        return Err(CodecError::Abi("expected a single string[] parameter".to_string()));
    };
    items
        .into_iter()
        .map(|item| {
            item.as_str()
                .map(str::to_owned)
                .ok_or_else(|| CodecError::Abi("expected a string element".to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call::{build_call, CallArgs};
    use assert_matches::assert_matches;
    use bcos_apis::ExecutionStatus;

    fn outcome(status: ExecutionStatus, output: &str) -> ExecutionOutcome {
        ExecutionOutcome {
            status,
            input: "0x".to_string(),
            output: output.to_string(),
        }
    }

    #[test]
    fn test_decode_input_none_cases() {
        assert_eq!(decode_input(""), Ok(None));
        assert_eq!(decode_input("0x"), Ok(None));
        // identifier-only payload: a zero-parameter call
        let absent = build_call("funcName", CallArgs::Absent).unwrap();
        assert_eq!(decode_input(&absent.payload_hex()), Ok(None));
    }

    #[test]
    fn test_decode_input_bad_hex_is_loud() {
        assert_matches!(decode_input("0xzz"), Err(CodecError::NotHex(_)));
    }

    #[test]
    fn test_decode_input_garbage_params_are_loud() {
        // method id followed by bytes that are not a string[] encoding
        let data = format!("0x{}{}", "aabbccdd", "ff".repeat(32));
        assert_matches!(decode_input(&data), Err(CodecError::Abi(_)));
    }

    #[test]
    fn test_decode_output_is_gated_on_status() {
        let call = build_call("funcName", CallArgs::list(&["aa", "bb"])).unwrap();
        let params_hex = format!("0x{}", hex::encode(&call.payload[4..]));

        let failed = outcome(ExecutionStatus::Failed("0x16".to_string()), &params_hex);
        assert_eq!(decode_output(&failed), Ok(None));

        let succeeded = outcome(ExecutionStatus::Success, &params_hex);
        assert_eq!(
            decode_output(&succeeded),
            Ok(Some(vec!["aa".to_string(), "bb".to_string()]))
        );
    }

    #[test]
    fn test_decode_output_accepts_both_identifier_forms() {
        let call = build_call("funcName", CallArgs::list(&["aa", "bb", "cc"])).unwrap();
        let with_id = outcome(ExecutionStatus::Success, &call.payload_hex());
        let without_id = outcome(
            ExecutionStatus::Success,
            &format!("0x{}", hex::encode(&call.payload[4..])),
        );
        let expected = Some(vec!["aa".to_string(), "bb".to_string(), "cc".to_string()]);
        assert_eq!(decode_output(&with_id).unwrap(), expected);
        assert_eq!(decode_output(&without_id).unwrap(), expected);
    }

    #[test]
    fn test_decode_output_none_cases() {
        assert_eq!(decode_output(&outcome(ExecutionStatus::Success, "")), Ok(None));
        assert_eq!(decode_output(&outcome(ExecutionStatus::Success, "0x")), Ok(None));
        // identifier-only output: nothing behind the prefix
        let absent = build_call("funcName", CallArgs::Absent).unwrap();
        assert_eq!(
            decode_output(&outcome(ExecutionStatus::Success, &absent.payload_hex())),
            Ok(None)
        );
    }

    #[test]
    fn test_decode_receipt_helpers() {
        let call = build_call("funcName", CallArgs::list(&["aa"])).unwrap();
        let receipt = Receipt {
            transaction_hash: format!("0x{}", "11".repeat(32)),
            transaction_index: 0,
            root: format!("0x{}", "22".repeat(32)),
            status: "0x16".to_string(),
            gas_used: "0x5208".to_string(),
            contract_address: format!("0x{}", "33".repeat(20)),
            logs_bloom: format!("0x{}", "00".repeat(256)),
            input: call.payload_hex(),
            output: format!("0x{}", hex::encode(&call.payload[4..])),
        };
        // inputs decode regardless of status; outputs only on success
        assert_eq!(
            decode_receipt_input(&receipt),
            Ok(Some(vec!["aa".to_string()]))
        );
        assert_eq!(decode_receipt_output(&receipt), Ok(None));

        let mut succeeded = receipt.clone();
        succeeded.status = "0x0".to_string();
        assert_eq!(
            decode_receipt_output(&succeeded),
            Ok(Some(vec!["aa".to_string()]))
        );
    }
}
