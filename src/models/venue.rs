//! Venue entity
//!
//! A venue is where an event takes place. Identity, name, address, and
//! capacity are fixed at construction; description and parking information
//! are mutable with different normalization rules (see the setter docs).

use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::{ValidationError, ValidationErrorKind, ValidationResult};
use super::validation::{non_blank, require_positive, require_value};

/// A venue hosting events
#[derive(Debug, Clone)]
pub struct Venue {
    venue_id: i32,
    name: String,
    address: String,
    capacity: i32,
    description: Option<String>,
    parking_info: String,
}

impl Venue {
    /// Create a new venue
    ///
    /// Checks run in order and the first violation wins: id positive, name
    /// present, address present, address non-blank, capacity positive.
    pub fn new(
        venue_id: i32,
        name: Option<&str>,
        address: Option<&str>,
        capacity: i32,
    ) -> ValidationResult<Self> {
        let venue_id = require_positive(venue_id, "venue_id")?;
        let name = require_value(name, "name")?;

        let address = require_value(address, "address")?;
        if address.trim().is_empty() {
            return Err(ValidationError::with_context(
                ValidationErrorKind::Invalid,
                "address",
                "address cannot be empty or whitespace",
            ));
        }

        let capacity = require_positive(capacity, "capacity")?;

        Ok(Self {
            venue_id,
            name: name.to_string(),
            address: address.to_string(),
            capacity,
            description: None,
            parking_info: String::new(),
        })
    }

    pub fn venue_id(&self) -> i32 {
        self.venue_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Parking information, never absent
    pub fn parking_info(&self) -> &str {
        &self.parking_info
    }

    /// Set the venue description
    ///
    /// Blank-collapsing: absent, empty, or whitespace-only input clears the
    /// description; anything else is stored as-is.
    pub fn set_description(&mut self, description: Option<&str>) {
        self.description = non_blank(description.map(str::to_string));
    }

    /// Set the parking information
    ///
    /// Null-coercing: absent input becomes the empty string. Whitespace is
    /// preserved, unlike the description.
    pub fn set_parking_info(&mut self, parking_info: Option<&str>) {
        self.parking_info = parking_info.unwrap_or_default().to_string();
    }
}

/// Virtual venue used when an event has no explicit venue
///
/// Produces a fresh instance on every call; callers must not rely on getting
/// the same instance twice.
impl Default for Venue {
    fn default() -> Self {
        Self {
            venue_id: 1,
            name: "Online Event".to_string(),
            address: "Virtual".to_string(),
            capacity: 10_000,
            description: None,
            parking_info: String::new(),
        }
    }
}

// Venue identity is the id alone; all other fields are ignored.
impl PartialEq for Venue {
    fn eq(&self, other: &Self) -> bool {
        self.venue_id == other.venue_id
    }
}

impl Eq for Venue {}

impl Hash for Venue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.venue_id.hash(state);
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Venue [Id: {}, Name: {}, Address: {}, Capacity: {}, Description: {}]",
            self.venue_id,
            self.name,
            self.address,
            self.capacity,
            self.description.as_deref().unwrap_or("N/A"),
        )
    }
}
