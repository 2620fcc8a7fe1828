//! Error types for trigger_augment
//!
//! This module defines the error types returned by the fallible entry
//! points of the library. Pipeline failures are reported as data inside a
//! [`PipelineOutcome`](crate::pipeline::runner::PipelineOutcome) instead.

use std::path::Path;

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AugmentError>;

/// Main error type for trigger_augment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AugmentError {
    /// Source text is blank, or a required trigger / enhancement list is empty
    #[error("Empty input: {message}")]
    EmptyInput { message: String },

    /// A preset payload lacks a required list or has the wrong shape
    #[error("Invalid preset: {message}")]
    PresetFormat { message: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Reading or writing a preset file failed
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },
}

impl AugmentError {
    /// Create an empty input error
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
        }
    }

    /// Create a preset format error
    pub fn invalid_preset(message: impl Into<String>) -> Self {
        Self::PresetFormat {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an I/O error for `path`
    pub fn io(path: &Path, err: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    /// Check if this error came from the caller's input rather than a preset
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::EmptyInput { .. })
    }
}

impl From<serde_json::Error> for AugmentError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AugmentError::empty_input("source text is blank");
        assert!(err.to_string().contains("Empty input"));
        assert!(err.to_string().contains("source text is blank"));

        let err = AugmentError::invalid_preset("missing triggers");
        assert_eq!(err.to_string(), "Invalid preset: missing triggers");
    }

    #[test]
    fn test_io_error_carries_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = AugmentError::io(Path::new("presets/a.json"), io);
        assert!(err.to_string().contains("presets/a.json"));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_is_input_error() {
        assert!(AugmentError::empty_input("x").is_input_error());
        assert!(!AugmentError::invalid_config("x").is_input_error());
    }

    #[test]
    fn test_from_serde_json() {
        let err: AugmentError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, AugmentError::Serialization { .. }));
    }
}
