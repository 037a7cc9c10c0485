//! eventforge Library
//!
//! In-memory event management domain model: Event, Speaker, and Venue
//! entities with guard-clause validation, plus the supporting configuration,
//! logging, and error handling modules.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod test_utils;

// Re-export commonly used types at the crate root
pub use config::Config;
pub use error::{Error, Result};

// Re-export model types
pub use models::{
    Clock, Event, FixedClock, Speaker, SystemClock, ValidationError, ValidationErrorKind,
    ValidationResult, Venue,
};
