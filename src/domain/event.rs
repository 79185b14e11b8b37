//! The event record and its unsaved counterpart.

use chrono::{DateTime, FixedOffset};

use super::EventId;
use crate::error::ReminderError;

/// A stored event.
///
/// `recurring` events are reminded on every day whose day-of-month matches
/// `date`; one-time events are reminded during the week leading up to
/// `date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Store-assigned identifier (immutable).
    pub id: EventId,
    /// Display name, never empty.
    pub name: String,
    /// Event date with its original UTC offset.
    pub date: DateTime<FixedOffset>,
    /// Whether the date is a monthly anniversary rather than a deadline.
    pub recurring: bool,
}

impl Event {
    /// Attaches an identifier to a validated [`NewEvent`].
    #[must_use]
    pub fn from_new(id: EventId, new: NewEvent) -> Self {
        Self {
            id,
            name: new.name,
            date: new.date,
            recurring: new.recurring,
        }
    }
}

/// A validated event that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    /// Display name, stored as given; never blank.
    pub name: String,
    /// Event date.
    pub date: DateTime<FixedOffset>,
    /// Recurrence flag.
    pub recurring: bool,
}

impl NewEvent {
    /// Validates the fields and builds a `NewEvent`.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderError::Validation`] if `name` is blank.
    pub fn new(
        name: impl Into<String>,
        date: DateTime<FixedOffset>,
        recurring: bool,
    ) -> Result<Self, ReminderError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ReminderError::Validation(
                "event name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            name,
            date,
            recurring,
        })
    }
}
