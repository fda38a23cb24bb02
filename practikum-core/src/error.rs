//! Error types for Practikum Core

use thiserror::Error;

/// Result type alias using PractikumError
pub type Result<T> = std::result::Result<T, PractikumError>;

/// Every failure an operation can report.
///
/// Client-caused failures are detected before any mutation is performed.
#[derive(Debug, Error)]
pub enum PractikumError {
    /// Malformed, missing or out-of-bounds input, or a dangling reference
    #[error("{0}")]
    InvalidInput(String),

    /// The targeted row does not exist
    #[error("{0}")]
    NotFound(String),

    /// The storage backend could not serve the request
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl PractikumError {
    /// Machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            PractikumError::InvalidInput(_) => "invalid_input",
            PractikumError::NotFound(_) => "not_found",
            PractikumError::Unavailable(_) => "unavailable",
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        PractikumError::InvalidInput(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        PractikumError::NotFound(message.into())
    }
}

impl From<rusqlite::Error> for PractikumError {
    fn from(err: rusqlite::Error) -> Self {
        PractikumError::Unavailable(err.to_string())
    }
}

impl From<tokio::task::JoinError> for PractikumError {
    fn from(err: tokio::task::JoinError) -> Self {
        PractikumError::Unavailable(format!("Task failed: {}", err))
    }
}
