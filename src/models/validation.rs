//! Guard clauses for eventforge models
//!
//! This module provides the reusable validation primitives the entity
//! constructors and setters are built from. All functions are pure and keep
//! no shared state; in particular the date guard takes its reference instant
//! as a parameter instead of reading the system clock itself.

use chrono::{DateTime, Utc};

use super::error::{ValidationError, ValidationErrorKind, ValidationResult};

/// Narrow an optional value to a required one
///
/// Fails with a `Missing` error when the value is absent; otherwise passes
/// the value through unchanged.
pub fn require_value<T>(value: Option<T>, field_name: &str) -> ValidationResult<T> {
    value.ok_or_else(|| {
        ValidationError::with_context(
            ValidationErrorKind::Missing,
            field_name,
            format!("{} must be provided", field_name),
        )
    })
}

/// Validate that a numeric value is greater than zero
pub fn require_positive(value: i32, field_name: &str) -> ValidationResult<i32> {
    if value <= 0 {
        Err(ValidationError::with_context(
            ValidationErrorKind::OutOfRange,
            field_name,
            format!("{} must be greater than zero, got: {}", field_name, value),
        ))
    } else {
        Ok(value)
    }
}

/// Validate that a date is not strictly before the reference instant
///
/// A date equal to the reference instant passes. The caller supplies the
/// reference (normally a [`Clock::now`](super::clock::Clock::now) reading) so
/// the check stays deterministic under test.
pub fn require_not_past(
    date: DateTime<Utc>,
    reference: DateTime<Utc>,
    field_name: &str,
) -> ValidationResult<DateTime<Utc>> {
    if date < reference {
        Err(ValidationError::with_context(
            ValidationErrorKind::Invalid,
            field_name,
            format!("{} cannot be in the past", field_name),
        ))
    } else {
        Ok(date)
    }
}

/// Check that an email has a plausible shape
///
/// Deliberately minimal: non-blank and contains an '@'. No further RFC
/// validation is attempted.
pub fn is_valid_email(email: &str) -> bool {
    !email.trim().is_empty() && email.contains('@')
}

/// Collapse blank input to absence
///
/// Returns `None` for absent, empty, or whitespace-only input; otherwise the
/// original value, untrimmed. Every blank-collapsing field setter goes
/// through this.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_require_value_present() {
        let result = require_value(Some("title"), "title");
        assert_eq!(result.unwrap(), "title");
    }

    #[test]
    fn test_require_value_absent() {
        let result = require_value::<&str>(None, "title");
        let error = result.unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::Missing);
        assert_eq!(error.field, "title");
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive(1, "id").unwrap(), 1);
        assert_eq!(require_positive(10_000, "capacity").unwrap(), 10_000);

        for value in [0, -1, -100] {
            let error = require_positive(value, "id").unwrap_err();
            assert_eq!(error.kind, ValidationErrorKind::OutOfRange);
        }
    }

    #[test]
    fn test_require_not_past_future_date() {
        let now = Utc::now();
        let future = now + Duration::days(30);
        assert_eq!(require_not_past(future, now, "event_date").unwrap(), future);
    }

    #[test]
    fn test_require_not_past_boundary_is_valid() {
        let now = Utc::now();
        assert!(require_not_past(now, now, "event_date").is_ok());
    }

    #[test]
    fn test_require_not_past_rejects_past_date() {
        let now = Utc::now();
        let yesterday = now - Duration::days(1);
        let error = require_not_past(yesterday, now, "event_date").unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::Invalid);
        assert!(error.to_string().contains("past"));
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("joao@email.com"));
        assert!(is_valid_email("a@b"));

        assert!(!is_valid_email("joaoemail.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("   "));
    }

    #[test]
    fn test_non_blank_collapses_blank_input() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(String::new())), None);
        assert_eq!(non_blank(Some("   ".to_string())), None);
    }

    #[test]
    fn test_non_blank_preserves_content_untrimmed() {
        assert_eq!(
            non_blank(Some("biography".to_string())),
            Some("biography".to_string())
        );
        // Non-blank values keep their surrounding whitespace
        assert_eq!(
            non_blank(Some("  padded  ".to_string())),
            Some("  padded  ".to_string())
        );
    }
}
