// Copyright 2025 Cowboy AI, LLC.

//! Error types for the preview pipeline
//!
//! The classification pipeline itself is total and never fails; errors only
//! arise at the crate boundary, when parsing mode/kind literals supplied by
//! callers or decoding catalog payloads.

use thiserror::Error;

/// Errors that can occur at the preview crate boundary
#[derive(Debug, Clone, Error)]
pub enum PreviewError {
    /// A picker mode literal outside the closed `motif`/`skeleton`/`operator` set
    #[error("Unknown picker mode: {value}")]
    UnknownMode {
        /// The literal that failed to parse
        value: String,
    },

    /// A preview kind tag outside the closed enumeration
    #[error("Unknown preview kind: {value}")]
    UnknownKind {
        /// The tag that failed to parse
        value: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type for preview boundary operations
pub type PreviewResult<T> = Result<T, PreviewError>;

impl From<serde_json::Error> for PreviewError {
    fn from(err: serde_json::Error) -> Self {
        PreviewError::SerializationError(err.to_string())
    }
}

impl PreviewError {
    /// Check if this is a parse error on one of the closed enumerations
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            PreviewError::UnknownMode { .. } | PreviewError::UnknownKind { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages
    #[test]
    fn test_error_display_messages() {
        let err = PreviewError::UnknownMode {
            value: "poster".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown picker mode: poster");

        let err = PreviewError::UnknownKind {
            value: "mega-grid".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown preview kind: mega-grid");

        let err = PreviewError::SerializationError("Invalid JSON".to_string());
        assert_eq!(err.to_string(), "Serialization error: Invalid JSON");
    }

    /// Test is_parse_error helper
    #[test]
    fn test_is_parse_error() {
        assert!(PreviewError::UnknownMode {
            value: "x".to_string()
        }
        .is_parse_error());
        assert!(PreviewError::UnknownKind {
            value: "x".to_string()
        }
        .is_parse_error());
        assert!(!PreviewError::SerializationError("x".to_string()).is_parse_error());
    }

    /// Test serde_json error conversion
    #[test]
    fn test_serde_json_conversion() {
        let invalid_json = "{ invalid json }";
        let serde_err = serde_json::from_str::<serde_json::Value>(invalid_json).unwrap_err();

        let preview_err: PreviewError = serde_err.into();
        match preview_err {
            PreviewError::SerializationError(msg) => {
                assert!(!msg.is_empty());
            }
            _ => panic!("Expected SerializationError"),
        }
    }

    /// Test errors can be cloned
    #[test]
    fn test_error_clone() {
        let original = PreviewError::UnknownMode {
            value: "legacy".to_string(),
        };
        let cloned = original.clone();
        assert_eq!(original.to_string(), cloned.to_string());
    }
}
