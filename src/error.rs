//! Error types and result definitions

use thiserror::Error;

use crate::core::EntityKind;

/// Result type alias for rdfkb operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for rdfkb
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// An entity was declared with two different kinds
    #[error("Conflicting type for {entity}: declared as {existing}, redeclared as {requested}")]
    ConflictingType {
        entity: String,
        existing: EntityKind,
        requested: EntityKind,
    },

    /// Malformed knowledge-base artifact
    #[error("Artifact error: {0}")]
    Artifact(String),

    /// Prediction relay error
    #[error("Relay error: {0}")]
    Relay(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<crate::relay::RelayError> for Error {
    fn from(err: crate::relay::RelayError) -> Self {
        Error::Relay(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Config("test error".to_string());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_conflicting_type_display() {
        let err = Error::ConflictingType {
            entity: "http://example.org/art/Louvre".to_string(),
            existing: EntityKind::Museum,
            requested: EntityKind::Painting,
        };
        let message = err.to_string();
        assert!(message.contains("Louvre"));
        assert!(message.contains("Музей"));
        assert!(message.contains("Картина"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().starts_with("IO error"));
    }
}
