//! Core error types for rotpass operations.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use std::path::PathBuf;

use thiserror::Error;

/// Core error type for rotpass operations.
#[derive(Debug, Error)]
pub enum Error {
    // Request validation
    #[error("password length must be at least {minimum}, got {length}")]
    InvalidLength { length: usize, minimum: usize },

    #[error("password length {length} is too large to allocate")]
    LengthTooLarge { length: usize },

    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("master secret must not be empty")]
    MissingSecret,

    // Config I/O and parsing
    #[error("failed to read config '{path}': {reason}")]
    ConfigReadFailed { path: PathBuf, reason: String },

    #[error("JSON parse error: {reason}")]
    JsonParseFailed { reason: String },
}

impl Error {
    /// Create an invalid length error.
    #[must_use]
    pub const fn invalid_length(length: usize, minimum: usize) -> Self {
        Self::InvalidLength { length, minimum }
    }

    /// Create a length-too-large error.
    #[must_use]
    pub const fn length_too_large(length: usize) -> Self {
        Self::LengthTooLarge { length }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Create a config read error.
    #[must_use]
    pub fn config_read_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a JSON parse error.
    #[must_use]
    pub fn json_parse_failed(reason: impl Into<String>) -> Self {
        Self::JsonParseFailed {
            reason: reason.into(),
        }
    }

    /// Returns the machine-readable error code for this error.
    ///
    /// Error codes are always in `SCREAMING_SNAKE_CASE` format.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidLength { .. } => "INVALID_LENGTH",
            Self::LengthTooLarge { .. } => "LENGTH_TOO_LARGE",
            Self::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            Self::MissingSecret => "MISSING_SECRET",
            Self::ConfigReadFailed { .. } => "CONFIG_READ_FAILED",
            Self::JsonParseFailed { .. } => "JSON_PARSE_FAILED",
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::json_parse_failed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_length_message() {
        let err = Error::invalid_length(3, 4);
        assert_eq!(err.to_string(), "password length must be at least 4, got 3");
        assert_eq!(err.code(), "INVALID_LENGTH");
    }

    #[test]
    fn test_length_too_large_message() {
        let err = Error::length_too_large(usize::MAX);
        assert!(err.to_string().contains("too large"));
        assert_eq!(err.code(), "LENGTH_TOO_LARGE");
    }

    #[test]
    fn test_config_read_failed_includes_path() {
        let err = Error::config_read_failed("missing.json", "No such file");
        let msg = err.to_string();
        assert!(msg.contains("missing.json"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let err = parse.map_err(Error::from).err();
        assert!(matches!(err, Some(Error::JsonParseFailed { .. })));
    }
}
