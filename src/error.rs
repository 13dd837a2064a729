//! Error types for Passcore

use thiserror::Error;

/// Main error type for generator operations
#[derive(Error, Debug)]
pub enum PassError {
    /// Generation options rejected before any random draw
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// Character pool ended up empty
    #[error("Character pool is empty")]
    EmptyPool,

    /// Database operation failed
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// History blob could not be serialized
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<rusqlite::Error> for PassError {
    fn from(err: rusqlite::Error) -> Self {
        PassError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for PassError {
    fn from(err: serde_json::Error) -> Self {
        PassError::SerializationError(err.to_string())
    }
}

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, PassError>;
