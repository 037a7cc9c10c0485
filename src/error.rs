//! Error handling module for eventforge
//!
//! This module defines the application-level error type, providing a unified
//! error handling strategy on top of the model validation errors.

use thiserror::Error;

use crate::models::ValidationError;

/// Result type alias for eventforge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for eventforge
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors from the domain models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Error::Validation(msg.into())
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Error::Internal(msg.into())
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err.to_string())
    }
}

impl From<envconfig::Error> for Error {
    fn from(err: envconfig::Error) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ValidationErrorKind;

    #[test]
    fn test_error_constructors() {
        assert!(matches!(Error::config("test"), Error::Config(_)));
        assert!(matches!(Error::validation("test"), Error::Validation(_)));
        assert!(matches!(Error::internal("test"), Error::Internal(_)));
    }

    #[test]
    fn test_error_display() {
        let error = Error::validation("duration too short");
        assert_eq!(error.to_string(), "Validation error: duration too short");
    }

    #[test]
    fn test_from_validation_error() {
        let model_error = ValidationError::new(ValidationErrorKind::OutOfRange, "duration");
        let error: Error = model_error.into();
        assert!(matches!(error, Error::Validation(_)));
        assert!(error.to_string().contains("duration"));
    }
}
