//! Test utilities for eventforge
//!
//! This module provides fixture constructors shared by unit and integration
//! tests.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Event, FixedClock, Speaker, Venue};

/// An instant safely in the future relative to any test run
pub fn upcoming_date() -> DateTime<Utc> {
    Utc::now() + Duration::days(30)
}

/// A clock pinned to the current instant
pub fn fixed_clock() -> FixedClock {
    FixedClock::new(Utc::now())
}

/// Create a valid test speaker
pub fn sample_speaker() -> Speaker {
    Speaker::new(1, Some("Joao Silva"), Some("joao@email.com"))
        .expect("sample speaker should be valid")
}

/// Create a valid test venue
pub fn sample_venue() -> Venue {
    Venue::new(2, Some("Convention Center"), Some("Main Ave, 100"), 500)
        .expect("sample venue should be valid")
}

/// Create a valid test event scheduled in the future
pub fn upcoming_event() -> Event {
    Event::new(1, Some("Tech Conference"), upcoming_date(), Duration::hours(8))
        .expect("sample event should be valid")
}
