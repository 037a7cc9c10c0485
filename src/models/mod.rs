//! Domain models for eventforge
//!
//! This module contains the event management entities, the guard-clause
//! validation primitives they are built from, and the validation error type.

pub mod clock;
pub mod error;
pub mod event;
pub mod speaker;
pub mod validation;
pub mod venue;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ValidationError, ValidationErrorKind, ValidationResult};
pub use event::Event;
pub use speaker::Speaker;
pub use venue::Venue;
