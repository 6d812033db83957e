use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CodecError {
    #[error("Function name cannot be empty")]
    EmptyFunctionName,
    #[error("Call data is not valid hex: {0}")]
    NotHex(String),
    #[error("Failed to decode string list parameter: {0}")]
    Abi(String),
}
