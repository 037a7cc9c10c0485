//! Speaker entity
//!
//! A speaker presents at events. Identity, full name, and email are fixed at
//! construction; biography is blank-collapsing while company and LinkedIn
//! profile are null-coercing (never absent, absent input becomes "").

use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::{ValidationError, ValidationErrorKind, ValidationResult};
use super::validation::{is_valid_email, non_blank, require_positive, require_value};

/// A speaker presenting at an event
#[derive(Debug, Clone)]
pub struct Speaker {
    speaker_id: i32,
    full_name: String,
    email: String,
    biography: Option<String>,
    company: String,
    linked_in_profile: String,
}

impl Speaker {
    /// Create a new speaker
    ///
    /// Checks run in order and the first violation wins: id positive, name
    /// present, name non-blank, email present, email format.
    pub fn new(speaker_id: i32, full_name: Option<&str>, email: Option<&str>) -> ValidationResult<Self> {
        let speaker_id = require_positive(speaker_id, "speaker_id")?;

        let full_name = require_value(full_name, "full_name")?;
        if full_name.trim().is_empty() {
            return Err(ValidationError::with_context(
                ValidationErrorKind::Invalid,
                "full_name",
                "full_name cannot be empty or whitespace",
            ));
        }

        let email = require_value(email, "email")?;
        if !is_valid_email(email) {
            return Err(ValidationError::with_context(
                ValidationErrorKind::Invalid,
                "email",
                "Email must contain '@'",
            ));
        }

        Ok(Self {
            speaker_id,
            full_name: full_name.to_string(),
            email: email.to_string(),
            biography: None,
            company: String::new(),
            linked_in_profile: String::new(),
        })
    }

    pub fn speaker_id(&self) -> i32 {
        self.speaker_id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn biography(&self) -> Option<&str> {
        self.biography.as_deref()
    }

    /// Company the speaker works for, never absent
    pub fn company(&self) -> &str {
        &self.company
    }

    /// LinkedIn profile URL, never absent
    pub fn linked_in_profile(&self) -> &str {
        &self.linked_in_profile
    }

    /// Set the speaker biography
    ///
    /// Blank-collapsing: absent, empty, or whitespace-only input clears the
    /// biography; anything else is stored as-is.
    pub fn set_biography(&mut self, biography: Option<&str>) {
        self.biography = non_blank(biography.map(str::to_string));
    }

    /// Set the company, coercing absent input to the empty string
    pub fn set_company(&mut self, company: Option<&str>) {
        self.company = company.unwrap_or_default().to_string();
    }

    /// Set the LinkedIn profile, coercing absent input to the empty string
    pub fn set_linked_in_profile(&mut self, profile: Option<&str>) {
        self.linked_in_profile = profile.unwrap_or_default().to_string();
    }
}

// Speaker identity is the id alone; all other fields are ignored.
impl PartialEq for Speaker {
    fn eq(&self, other: &Self) -> bool {
        self.speaker_id == other.speaker_id
    }
}

impl Eq for Speaker {}

impl Hash for Speaker {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.speaker_id.hash(state);
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Speaker [Id: {}, Name: {}, Email: {}, Company: {}, Biography: {}]",
            self.speaker_id,
            self.full_name,
            self.email,
            self.company,
            self.biography.as_deref().unwrap_or("N/A"),
        )
    }
}
