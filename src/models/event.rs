//! Event entity
//!
//! An event (conference, workshop, seminar) composes an optional main
//! [`Speaker`] and a lazily materialized [`Venue`]. Identity, title, date,
//! and duration are fixed at construction; the remaining fields follow the
//! two normalization families described on their setters.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use chrono::{DateTime, Duration, Utc};

use super::clock::{Clock, SystemClock};
use super::error::{ValidationError, ValidationErrorKind, ValidationResult};
use super::speaker::Speaker;
use super::validation::{non_blank, require_not_past, require_positive, require_value};
use super::venue::Venue;

/// Minimum allowed event duration
const MIN_DURATION_MINUTES: i64 = 30;

/// An event such as a conference, workshop, or seminar
#[derive(Debug, Clone)]
pub struct Event {
    event_id: i32,
    title: String,
    event_date: DateTime<Utc>,
    duration: Duration,
    description: Option<String>,
    event_code: String,
    requirements: String,
    notes: String,
    main_speaker: Option<Speaker>,
    // Lazily set to Venue::default() on first access, then stable for the
    // lifetime of this instance. OnceLock makes the first concurrent access
    // race-free.
    venue: OnceLock<Venue>,
}

impl Event {
    /// Create a new event, validating against the system clock
    ///
    /// Checks run in order and the first violation wins: id positive, title
    /// present, title non-blank, date not in the past, duration at least 30
    /// minutes.
    pub fn new(
        event_id: i32,
        title: Option<&str>,
        event_date: DateTime<Utc>,
        duration: Duration,
    ) -> ValidationResult<Self> {
        Self::new_with_clock(event_id, title, event_date, duration, &SystemClock)
    }

    /// Create a new event, validating the date against the given clock
    ///
    /// A date equal to the clock's current instant is accepted; only strictly
    /// earlier dates are rejected.
    pub fn new_with_clock<C: Clock>(
        event_id: i32,
        title: Option<&str>,
        event_date: DateTime<Utc>,
        duration: Duration,
        clock: &C,
    ) -> ValidationResult<Self> {
        let event_id = require_positive(event_id, "event_id")?;

        let title = require_value(title, "title")?;
        if title.trim().is_empty() {
            return Err(ValidationError::with_context(
                ValidationErrorKind::Invalid,
                "title",
                "title cannot be empty or whitespace",
            ));
        }

        let event_date = require_not_past(event_date, clock.now(), "event_date")?;

        if duration < Duration::minutes(MIN_DURATION_MINUTES) {
            return Err(ValidationError::with_context(
                ValidationErrorKind::OutOfRange,
                "duration",
                format!("duration must be at least {} minutes", MIN_DURATION_MINUTES),
            ));
        }

        Ok(Self {
            event_id,
            title: title.to_string(),
            event_date,
            duration,
            description: None,
            event_code: String::new(),
            requirements: String::new(),
            notes: String::new(),
            main_speaker: None,
            venue: OnceLock::new(),
        })
    }

    pub fn event_id(&self) -> i32 {
        self.event_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn event_date(&self) -> DateTime<Utc> {
        self.event_date
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Event code, never absent; empty until explicitly set
    pub fn event_code(&self) -> &str {
        &self.event_code
    }

    /// Participation requirements, never absent
    pub fn requirements(&self) -> &str {
        &self.requirements
    }

    /// General notes, never absent
    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn main_speaker(&self) -> Option<&Speaker> {
        self.main_speaker.as_ref()
    }

    /// The event venue
    ///
    /// Materializes [`Venue::default`] on first access and caches it; every
    /// subsequent read on this instance returns the same venue. There is no
    /// way to reset the cache once materialized.
    pub fn venue(&self) -> &Venue {
        self.venue.get_or_init(Venue::default)
    }

    /// Set the event code
    ///
    /// Unlike requirements/notes, absent input is rejected rather than
    /// coerced. The stored value is trimmed of leading and trailing
    /// whitespace.
    pub fn set_event_code(&mut self, code: Option<&str>) -> ValidationResult<()> {
        let code = require_value(code, "code")?;
        self.event_code = code.trim().to_string();
        Ok(())
    }

    /// Set the event description
    ///
    /// Blank-collapsing: absent, empty, or whitespace-only input clears the
    /// description; anything else is stored as-is.
    pub fn set_description(&mut self, description: Option<&str>) {
        self.description = non_blank(description.map(str::to_string));
    }

    /// Set the requirements, coercing absent input to the empty string
    pub fn set_requirements(&mut self, requirements: Option<&str>) {
        self.requirements = requirements.unwrap_or_default().to_string();
    }

    /// Set the notes, coercing absent input to the empty string
    pub fn set_notes(&mut self, notes: Option<&str>) {
        self.notes = notes.unwrap_or_default().to_string();
    }

    /// Assign the main speaker
    ///
    /// Absent input is rejected; a present speaker unconditionally replaces
    /// any previous assignment.
    pub fn assign_main_speaker(&mut self, speaker: Option<Speaker>) -> ValidationResult<()> {
        let speaker = require_value(speaker, "speaker")?;
        self.main_speaker = Some(speaker);
        Ok(())
    }
}

// Event identity is the id alone; all other fields are ignored.
impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.event_id == other.event_id
    }
}

impl Eq for Event {}

impl Hash for Event {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.event_id.hash(state);
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event [Id: {}, Title: {}, Date: {}, Duration: {}h, Code: {}, MainSpeaker: {}]",
            self.event_id,
            self.title,
            self.event_date.format("%Y-%m-%d"),
            self.duration.num_minutes() as f64 / 60.0,
            self.event_code,
            self.main_speaker
                .as_ref()
                .map(Speaker::full_name)
                .unwrap_or("TBD"),
        )
    }
}
