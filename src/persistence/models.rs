//! Database row models.

use crate::domain::{Event, EventId, timestamp};
use crate::error::ReminderError;

/// A row from the `events` table.
///
/// `date` is kept as the raw RFC 3339 text so that a corrupt value is
/// reported instead of silently coerced.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EventRow {
    /// Auto-increment row id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// RFC 3339 timestamp with offset.
    pub date: String,
    /// Recurrence flag.
    pub recurring: bool,
}

impl TryFrom<EventRow> for Event {
    type Error = ReminderError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        let date = timestamp::parse(&row.date).map_err(|e| {
            ReminderError::Storage(format!("corrupt date in event row {}: {e}", row.id))
        })?;
        Ok(Self {
            id: EventId::new(row.id),
            name: row.name,
            date,
            recurring: row.recurring,
        })
    }
}
