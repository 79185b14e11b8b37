//! Event DTOs for create, replace, get and list operations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Event, NewEvent, timestamp};
use crate::error::ReminderError;

/// Request body for `POST /events` and `PUT /events/{id}`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EventRequest {
    /// Display name; must not be blank.
    #[schema(example = "Rent")]
    pub name: String,
    /// RFC 3339 timestamp with offset.
    #[schema(format = DateTime, example = "2024-03-15T09:00:00+01:00")]
    pub date: String,
    /// Whether the reminder repeats on the same day of every month.
    #[serde(default)]
    pub recurring: bool,
}

impl EventRequest {
    /// Validates the request into a [`NewEvent`].
    ///
    /// # Errors
    ///
    /// Returns [`ReminderError::Validation`] for an unparseable date or a
    /// blank name.
    pub fn into_new_event(self) -> Result<NewEvent, ReminderError> {
        let date = timestamp::parse(&self.date)?;
        NewEvent::new(self.name, date, self.recurring)
    }
}

/// A stored event as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    /// Store-assigned id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// RFC 3339 timestamp with offset.
    #[schema(format = DateTime)]
    pub date: String,
    /// Recurrence flag.
    pub recurring: bool,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id.get(),
            date: timestamp::format(&event.date),
            name: event.name,
            recurring: event.recurring,
        }
    }
}
