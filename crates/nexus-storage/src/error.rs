//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using the persistent store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing store is unavailable (no window, storage disabled).
    #[error("Persistent storage unavailable: {0}")]
    Unavailable(String),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backing store rejected an operation (e.g., quota exceeded).
    #[error("Store operation failed: {0}")]
    Backend(String),
}
