//! Common error types used across the workspace.
//!
//! Absence is never an error here: lookups that find nothing return
//! `Ok(None)` or an empty collection. What remains is input rejected by a
//! transport adapter and opaque failures coming out of a storage backend.

/// Top-level error for device operations.
#[derive(Debug, thiserror::Error)]
pub enum DevicesError {
    /// A request was rejected before reaching storage.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The storage backend failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Input rejected by presence checks.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The search query parameter was missing or empty.
    #[error("query param is required")]
    MissingQuery,

    /// The request body could not be decoded into the expected shape.
    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("disk on fire")]
    struct Boom;

    #[test]
    fn should_convert_validation_error_with_from() {
        let err: DevicesError = ValidationError::MissingQuery.into();
        assert!(matches!(
            err,
            DevicesError::Validation(ValidationError::MissingQuery)
        ));
    }

    #[test]
    fn should_keep_storage_source() {
        let err = DevicesError::Storage(Box::new(Boom));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "disk on fire");
    }
}
