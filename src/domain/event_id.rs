//! Type-safe event identifier.
//!
//! [`EventId`] is a newtype wrapper around the store-assigned `i64` row id
//! so that event identifiers cannot be confused with other integers.

use std::fmt;
use std::str::FromStr;

use crate::error::ReminderError;

/// Unique identifier for a stored event.
///
/// Assigned by the event store on insertion and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(i64);

impl EventId {
    /// Wraps a raw row id.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw row id.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EventId {
    type Err = ReminderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ReminderError::Validation(format!("invalid event id: {s}")))
    }
}
