mod call;
mod decode;
mod error;

pub use self::call::{
    build_call, method_id, CallArgs, CallSpec, METHOD_ID_HEX_LEN, METHOD_ID_LEN,
};
pub use self::decode::{decode_input, decode_output, decode_receipt_input, decode_receipt_output};
pub use self::error::CodecError;
