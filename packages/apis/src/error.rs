use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ApiError {
    #[error("Receipt field {field} is not valid hex: {reason}")]
    FieldNotHex { field: &'static str, reason: String },
    #[error("Value {value:?} is not a valid hex quantity: {reason}")]
    InvalidQuantity { value: String, reason: String },
}
