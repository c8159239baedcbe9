//! Storage-specific error type for the in-memory adapter.

use devices_domain::error::DevicesError;

/// Errors originating from the in-memory storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A previous holder of the lock panicked mid-operation.
    #[error("device store lock poisoned")]
    Poisoned,
}

impl From<StorageError> for DevicesError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
