use thiserror::Error;

/// Failures of the persistent key-value store backing the session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    /// No storage area exists (private browsing, storage disabled, no window).
    #[error("Persistent storage is not available")]
    Unavailable,
    /// The storage backend rejected the operation (quota, security policy).
    #[error("Persistent storage operation failed: {0}")]
    Backend(String),
    /// A value could not be serialized before being written.
    #[error("Failed to serialize value for storage: {0}")]
    Serialize(String),
}
