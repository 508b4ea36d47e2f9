//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RoomcraftError`] via `From`.

/// Top-level error shared by every layer.
#[derive(Debug, thiserror::Error)]
pub enum RoomcraftError {
    /// Input failed a structural check.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested document does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The document store failed or is unreachable.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Structural problems with caller input.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// An identifier was empty.
    #[error("identifier must not be empty")]
    EmptyId,

    /// The request body did not match the expected shape.
    #[error("malformed body: {0}")]
    MalformedBody(String),
}

/// A lookup by key found nothing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    /// Kind of document that was looked up (e.g. `"Design"`).
    pub entity: &'static str,
    /// The key that was requested.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Design",
            id: "living-room".to_string(),
        };
        assert_eq!(err.to_string(), "Design not found: living-room");
    }

    #[test]
    fn should_convert_validation_error_into_roomcraft_error() {
        let err: RoomcraftError = ValidationError::EmptyId.into();
        assert!(matches!(
            err,
            RoomcraftError::Validation(ValidationError::EmptyId)
        ));
    }

    #[test]
    fn should_keep_source_for_storage_errors() {
        let io = std::io::Error::other("connection refused");
        let err = RoomcraftError::Storage(Box::new(io));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "connection refused");
    }
}
