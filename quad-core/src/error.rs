//! Error types for the quad ecosystem.

use thiserror::Error;

/// Errors that can occur in quad operations.
#[derive(Error, Debug)]
pub enum QuadError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for quad operations.
pub type QuadResult<T> = Result<T, QuadError>;
