//! Persistence layer: the event store contract and its SQLite backend.
//!
//! [`EventStore`] is the seam between the service layer and storage. The
//! concrete implementation, [`SqliteEventStore`], uses `sqlx::SqlitePool`;
//! the pool serializes writers, so callers add no locking of their own.

pub mod models;
pub mod seed;
pub mod sqlite;

use async_trait::async_trait;

use crate::domain::{Event, EventId, NewEvent};
use crate::error::ReminderError;

pub use sqlite::SqliteEventStore;

/// Durable CRUD over [`Event`] records.
///
/// Every failure other than a lookup miss surfaces as
/// [`ReminderError::Storage`]; callers propagate it without interpreting
/// the driver message.
#[async_trait]
pub trait EventStore: Send + Sync + std::fmt::Debug {
    /// Returns every stored event in insertion order.
    async fn get_events(&self) -> Result<Vec<Event>, ReminderError>;

    /// Returns the event with the given id.
    async fn get_event_by_id(&self, id: EventId) -> Result<Event, ReminderError>;

    /// Persists a new event and returns it with its assigned id.
    async fn add_event(&self, event: NewEvent) -> Result<Event, ReminderError>;

    /// Replaces name, date and recurrence of the row matching `event.id`.
    async fn update_event(&self, event: &Event) -> Result<(), ReminderError>;

    /// Removes the row matching `id`.
    async fn delete_event(&self, id: EventId) -> Result<(), ReminderError>;

    /// Creates the schema if it does not exist yet. Idempotent.
    async fn init(&self) -> Result<(), ReminderError>;

    /// Releases the underlying connections.
    async fn close(&self);
}
