mod error;
mod outcome;
mod quantity;
mod receipt;
mod transaction;

pub use self::error::ApiError;
pub use self::outcome::{ExecutionOutcome, ExecutionStatus, SUCCESS_STATUS};
pub use self::quantity::{normalize_quantity, quantity_bytes, strip_hex_prefix};
pub use self::receipt::Receipt;
pub use self::transaction::Transaction;

/// Hash size in bytes
pub const HASH_SIZE: usize = 32;
