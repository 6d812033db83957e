use alloy_dyn_abi::DynSolValue;
use sha3::{Digest, Keccak256};

use crate::error::CodecError;

/// Number of bytes in a method identifier.
pub const METHOD_ID_LEN: usize = 4;
/// Length of a `0x`-prefixed method identifier in hex characters.
pub const METHOD_ID_HEX_LEN: usize = 2 + 2 * METHOD_ID_LEN;

/// The argument cardinalities of the string calling convention.
///
/// `Absent` calls a function that declares no inputs at all; `List` calls a
/// function taking a single `string[]` parameter, which may hold zero
/// elements. A zero-parameter call and a call with an empty list are
/// byte-distinct on the wire and must stay distinct here.
#[derive(Debug, Clone, PartialEq)]
pub enum CallArgs {
    Absent,
    List(Vec<String>),
}

impl From<Option<Vec<String>>> for CallArgs {
    fn from(args: Option<Vec<String>>) -> Self {
        match args {
            None => CallArgs::Absent,
            Some(items) => CallArgs::List(items),
        }
    }
}

impl CallArgs {
    /// Convenience constructor from string slices.
    pub fn list<S: AsRef<str>>(items: &[S]) -> Self {
        CallArgs::List(items.iter().map(|s| s.as_ref().to_string()).collect())
    }
}

/// A fully-encoded contract call, ready for the transport to submit.
#[derive(Debug, Clone, PartialEq)]
pub struct CallSpec {
    pub name: String,
    /// Canonical textual signature the method identifier is derived from.
    pub signature: String,
    pub method_id: [u8; METHOD_ID_LEN],
    /// `method_id ++ encoded arguments`.
    pub payload: Vec<u8>,
}

impl CallSpec {
    /// `0x`-prefixed payload form submitted over the transport.
    pub fn payload_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.payload))
    }
}

/// First [`METHOD_ID_LEN`] bytes of keccak-256 over a canonical signature.
pub fn method_id(signature: &str) -> [u8; METHOD_ID_LEN] {
    let digest = Keccak256::digest(signature.as_bytes());
    let mut id = [0u8; METHOD_ID_LEN];
    id.copy_from_slice(&digest[..METHOD_ID_LEN]);
    id
}

/// Builds the canonical call payload for `name` with the given arguments.
///
/// `Absent` arguments select the zero-parameter signature `name()` and a
/// method-identifier-only payload. A present list, empty or not, selects
/// `name(string[])` and appends the ABI encoding of that single parameter.
pub fn build_call(name: &str, args: CallArgs) -> Result<CallSpec, CodecError> {
    if name.is_empty() {
        return Err(CodecError::EmptyFunctionName);
    }
    let (signature, encoded_args) = match args {
        CallArgs::Absent => (format!("{name}()"), Vec::new()),
        CallArgs::List(items) => {
            let values = items.into_iter().map(DynSolValue::String).collect();
            let params = DynSolValue::Tuple(vec![DynSolValue::Array(values)]);
            (format!("{name}(string[])"), params.abi_encode_params())
        }
    };
    let method_id = method_id(&signature);
    let mut payload = Vec::with_capacity(METHOD_ID_LEN + encoded_args.len());
    payload.extend_from_slice(&method_id);
    payload.extend_from_slice(&encoded_args);
    Ok(CallSpec {
        name: name.to_string(),
        signature,
        method_id,
        payload,
    })
}
