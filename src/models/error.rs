//! Validation error types for eventforge models
//!
//! This module defines the error type raised by guard clauses and entity
//! constructors, separate from the general application errors.

use std::fmt;
use thiserror::Error;

/// Main validation error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The kind of validation error
    pub kind: ValidationErrorKind,
    /// The parameter that failed validation
    pub field: String,
    /// Optional additional context
    pub context: Option<String>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(kind: ValidationErrorKind, field: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.into(),
            context: None,
        }
    }

    /// Create a validation error with additional context
    pub fn with_context(
        kind: ValidationErrorKind,
        field: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            field: field.into(),
            context: Some(context.into()),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context {
            Some(ctx) => write!(
                f,
                "Validation failed for parameter '{}': {} - {}",
                self.field, self.kind, ctx
            ),
            None => write!(
                f,
                "Validation failed for parameter '{}': {}",
                self.field, self.kind
            ),
        }
    }
}

/// Specific validation error kinds
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required value was absent
    #[error("Required value is missing")]
    Missing,

    /// A numeric value violated a minimum or positivity bound
    #[error("Value is out of range")]
    OutOfRange,

    /// A value failed a semantic rule (blank string, past date, bad email)
    #[error("Value is invalid")]
    Invalid,
}

/// Result type alias for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_creation() {
        let error = ValidationError::new(ValidationErrorKind::Missing, "title");
        assert_eq!(error.field, "title");
        assert_eq!(error.kind, ValidationErrorKind::Missing);
        assert!(error.context.is_none());
    }

    #[test]
    fn test_validation_error_with_context() {
        let error = ValidationError::with_context(
            ValidationErrorKind::OutOfRange,
            "capacity",
            "capacity must be greater than zero",
        );
        assert_eq!(error.field, "capacity");
        assert_eq!(
            error.context.as_deref(),
            Some("capacity must be greater than zero")
        );
    }

    #[test]
    fn test_validation_error_display() {
        let error = ValidationError::new(ValidationErrorKind::OutOfRange, "venue_id");
        let display = error.to_string();
        assert!(display.contains("venue_id"));
        assert!(display.contains("out of range"));
    }

    #[test]
    fn test_validation_error_display_includes_context() {
        let error = ValidationError::with_context(
            ValidationErrorKind::Invalid,
            "email",
            "Email must contain '@'",
        );
        assert!(error.to_string().contains("@"));
    }

    #[test]
    fn test_validation_error_kinds_have_messages() {
        let kinds = [
            ValidationErrorKind::Missing,
            ValidationErrorKind::OutOfRange,
            ValidationErrorKind::Invalid,
        ];

        for kind in kinds {
            let error = ValidationError::new(kind, "test_field");
            assert!(!error.to_string().is_empty());
        }
    }
}
