use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MerkleError {
    #[error("Expected sibling #{index} to be {expected} bytes, got {got}")]
    SiblingWidth {
        index: usize,
        expected: usize,
        got: usize,
    },
    #[error("Sibling #{index} is not valid hex: {reason}")]
    SiblingNotHex { index: usize, reason: String },
    #[error("Expected no more than {max} path entries, got {got}")]
    PathTooLong { max: usize, got: usize },
    #[error("Trusted root is not valid hex: {reason}")]
    RootNotHex { reason: String },
    #[error("Artifact hash is not valid hex: {reason}")]
    ArtifactNotHex { reason: String },
    #[error("Empty authentication path does not terminate at the trusted root")]
    EmptyPathMismatch,
    #[error(transparent)]
    Artifact(#[from] bcos_apis::ApiError),
}
