//! Storage-specific error type wrapping file and JSON errors.

use std::path::PathBuf;

use contactbook_domain::error::{ContactBookError, ValidationError};

/// Errors originating from the JSON file storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file is not a valid contacts document.
    #[error("invalid contacts document in {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The built-in demo contacts failed validation.
    #[error("invalid demo contacts")]
    Seed(#[from] ValidationError),
}

impl From<StorageError> for ContactBookError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
