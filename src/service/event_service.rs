//! Event service: validated CRUD over the event store.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset};

use crate::domain::{Event, EventId, NewEvent};
use crate::error::ReminderError;
use crate::persistence::EventStore;

/// Orchestration layer for event operations.
///
/// Stateless coordinator over an [`EventStore`]. Input is validated here,
/// before anything reaches the store; store errors are propagated as-is.
#[derive(Debug, Clone)]
pub struct EventService {
    store: Arc<dyn EventStore>,
}

impl EventService {
    /// Creates a new `EventService`.
    #[must_use]
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    /// Returns every stored event.
    ///
    /// # Errors
    ///
    /// Returns a [`ReminderError::Storage`] on store failure.
    pub async fn list_events(&self) -> Result<Vec<Event>, ReminderError> {
        self.store.get_events().await
    }

    /// Returns a single event.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderError::EventNotFound`] if no event has this id.
    pub async fn get_event(&self, id: EventId) -> Result<Event, ReminderError> {
        self.store.get_event_by_id(id).await
    }

    /// Validates and stores a new event.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderError::Validation`] for a blank name, or a
    /// storage error.
    pub async fn create_event(
        &self,
        name: &str,
        date: DateTime<FixedOffset>,
        recurring: bool,
    ) -> Result<Event, ReminderError> {
        let new = NewEvent::new(name, date, recurring)?;
        let event = self.store.add_event(new).await?;
        tracing::info!(event_id = %event.id, name = %event.name, recurring, "event created");
        Ok(event)
    }

    /// Replaces name, date and recurrence of an existing event.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderError::Validation`] for a blank name,
    /// [`ReminderError::EventNotFound`] if the id is unknown, or a storage
    /// error.
    pub async fn replace_event(
        &self,
        id: EventId,
        name: &str,
        date: DateTime<FixedOffset>,
        recurring: bool,
    ) -> Result<Event, ReminderError> {
        let event = Event::from_new(id, NewEvent::new(name, date, recurring)?);
        self.store.update_event(&event).await?;
        tracing::info!(event_id = %id, "event replaced");
        Ok(event)
    }

    /// Deletes an event.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderError::EventNotFound`] if the id is unknown, or a
    /// storage error.
    pub async fn delete_event(&self, id: EventId) -> Result<(), ReminderError> {
        self.store.delete_event(id).await?;
        tracing::info!(event_id = %id, "event deleted");
        Ok(())
    }
}
