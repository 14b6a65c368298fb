//! # Error Types
//!
//! Structured error types for reveal_core. The comparison surface itself never
//! fails: positions are clamped and zero-sized containers are ignored. Errors
//! only surface at the edges of the crate, when reading or writing preset files
//! and when a platform haptic engine cannot fire.
//!
//! ## Example
//!
//! ```rust
//! use std::path::Path;
//! use reveal_core::preset::load_preset;
//!
//! let error = load_preset(Path::new("/no/such/dir/preset.rvl")).unwrap_err();
//! assert_eq!(error.error_code(), "FILE_ERROR");
//! assert!(!error.is_recoverable());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for reveal_core operations
pub type RevealResult<T> = Result<T, RevealError>;

/// Structured error type for slider operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum RevealError {
    /// An input value cannot be used as given
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Preset schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// The platform haptic engine could not deliver feedback
    #[error("Haptics unavailable: {reason}")]
    HapticsUnavailable { reason: String },
}

impl RevealError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        RevealError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        RevealError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        RevealError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Create a HapticsUnavailable error
    pub fn haptics_unavailable(reason: impl Into<String>) -> Self {
        RevealError::HapticsUnavailable {
            reason: reason.into(),
        }
    }

    /// Check if this is a recoverable error (the caller may simply carry on)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RevealError::HapticsUnavailable { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            RevealError::InvalidInput { .. } => "INVALID_INPUT",
            RevealError::FileError { .. } => "FILE_ERROR",
            RevealError::SerializationError { .. } => "SERIALIZATION_ERROR",
            RevealError::VersionMismatch { .. } => "VERSION_MISMATCH",
            RevealError::HapticsUnavailable { .. } => "HAPTICS_UNAVAILABLE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = RevealError::file_error("open", "/tmp/missing.rvl", "No such file");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"FileError\""));
        let roundtrip: RevealError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(RevealError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
        assert_eq!(RevealError::invalid_input("name", "", "empty").error_code(), "INVALID_INPUT");
        assert_eq!(
            RevealError::haptics_unavailable("no engine").error_code(),
            "HAPTICS_UNAVAILABLE"
        );
    }

    #[test]
    fn test_only_haptics_errors_are_recoverable() {
        assert!(RevealError::haptics_unavailable("busy").is_recoverable());
        assert!(!RevealError::invalid_input("x", "1", "bad").is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let error = RevealError::VersionMismatch {
            file_version: "1.0.0".to_string(),
            expected_version: "0.1.0".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Version mismatch: file version 1.0.0, expected 0.1.0"
        );
    }
}
