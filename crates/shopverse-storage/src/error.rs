//! Storage error types.

use thiserror::Error;

/// Errors that can occur when reading or writing local storage.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the storage location.
    #[error("Failed to open storage at {path}: {source}")]
    OpenError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// An I/O operation on a stored key failed.
    #[error("Storage operation on '{key}' failed: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Key contains characters the backend cannot store.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// The in-memory map was poisoned by a panicking writer.
    #[error("Storage lock poisoned")]
    Poisoned,
}
