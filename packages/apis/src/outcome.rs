use crate::receipt::Receipt;

/// Canonical status code a successful execution reports.
pub const SUCCESS_STATUS: &str = "0x0";

/// Chain-reported result of running a call. Output bytes are only a valid
/// encoding of the declared return types when the execution succeeded, so
/// the distinction is carried structurally instead of as a status string
/// compared at every call site.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionStatus {
    Success,
    Failed(String),
}

impl ExecutionStatus {
    pub fn from_code(code: &str) -> Self {
        if code == SUCCESS_STATUS {
            ExecutionStatus::Success
        } else {
            ExecutionStatus::Failed(code.to_string())
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionStatus::Success)
    }
}

/// Status plus the raw input/output bytes of an executed call.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionOutcome {
    pub status: ExecutionStatus,
    pub input: String,
    pub output: String,
}

impl From<&Receipt> for ExecutionOutcome {
    fn from(receipt: &Receipt) -> Self {
        ExecutionOutcome {
            status: ExecutionStatus::from_code(&receipt.status),
            input: receipt.input.clone(),
            output: receipt.output.clone(),
        }
    }
}
