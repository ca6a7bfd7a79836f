use thiserror::Error;

#[derive(Error, Debug)]
pub enum AstraError {
    /// Input was not valid UTF-8. `valid_up_to` is the length of the
    /// longest valid prefix.
    #[error("Invalid encoding: input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidEncoding { valid_up_to: usize },
    #[error("Allocation failure")]
    AllocationFailure,
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<std::str::Utf8Error> for AstraError {
    fn from(err: std::str::Utf8Error) -> Self {
        AstraError::InvalidEncoding { valid_up_to: err.valid_up_to() }
    }
}

impl From<std::collections::TryReserveError> for AstraError {
    fn from(_: std::collections::TryReserveError) -> Self {
        AstraError::AllocationFailure
    }
}

pub type Result<T> = std::result::Result<T, AstraError>;
