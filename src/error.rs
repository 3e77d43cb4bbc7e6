//! Error types for the fixture kit
//!
//! Provides unified error handling using thiserror.
//!
//! Lookups that simply find nothing (missing record, missing key) are not
//! errors; the stores report them as `None` or `false`.

use thiserror::Error;

// == Fixture Error Enum ==
/// Unified error type for the fixture kit.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// Caller asked for something that is not configured or not known
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input failed a validation rule
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Configuration could not be interpreted
    #[error("Configuration error: {0}")]
    Config(String),

    /// Underlying file access failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Password hashing failed
    #[error("Password hash error: {0}")]
    PasswordHash(String),
}

// == Result Type Alias ==
/// Convenience Result type for the fixture kit.
pub type Result<T> = std::result::Result<T, FixtureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FixtureError::InvalidArgument("Unknown database: nope".to_string());
        assert_eq!(err.to_string(), "Invalid argument: Unknown database: nope");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: FixtureError = parse.unwrap_err().into();
        assert!(matches!(err, FixtureError::Json(_)));
    }
}
