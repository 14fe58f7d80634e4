/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Key contains characters the backend cannot store
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// The backing store rejected a read or write
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// No storage facility on this platform
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<StorageError> for tilawah_core::TilawahError {
    fn from(err: StorageError) -> Self {
        tilawah_core::TilawahError::storage(err.to_string())
    }
}

impl From<tilawah_core::TilawahError> for StorageError {
    fn from(err: tilawah_core::TilawahError) -> Self {
        StorageError::Backend(err.to_string())
    }
}
