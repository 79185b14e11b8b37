//! SQLite implementation of the event store.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::EventStore;
use super::models::EventRow;
use crate::domain::{Event, EventId, NewEvent, timestamp};
use crate::error::ReminderError;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS events (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    date TEXT NOT NULL,
    recurring BOOLEAN NOT NULL
)";

/// SQLite-backed event store using `sqlx::SqlitePool`.
#[derive(Debug, Clone)]
pub struct SqliteEventStore {
    pool: SqlitePool,
}

impl SqliteEventStore {
    /// Opens (and creates if missing) the database file at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`ReminderError::Storage`] if the database cannot be opened.
    pub async fn connect(path: &str, max_connections: u32) -> Result<Self, ReminderError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?;
        tracing::info!(path, "connected to sqlite");
        Ok(Self { pool })
    }

    /// Opens a private in-memory database.
    ///
    /// The pool holds a single connection that is never recycled, since an
    /// in-memory database lives only as long as its connection.
    ///
    /// # Errors
    ///
    /// Returns a [`ReminderError::Storage`] if SQLite cannot be opened.
    pub async fn in_memory() -> Result<Self, ReminderError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    /// Returns the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl EventStore for SqliteEventStore {
    async fn get_events(&self) -> Result<Vec<Event>, ReminderError> {
        let rows = sqlx::query_as::<_, EventRow>(
            "SELECT id, name, date, recurring FROM events ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Event::try_from).collect()
    }

    async fn get_event_by_id(&self, id: EventId) -> Result<Event, ReminderError> {
        let row = sqlx::query_as::<_, EventRow>(
            "SELECT id, name, date, recurring FROM events WHERE id = ?",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(ReminderError::EventNotFound(id))?;

        Event::try_from(row)
    }

    async fn add_event(&self, event: NewEvent) -> Result<Event, ReminderError> {
        let result = sqlx::query("INSERT INTO events (name, date, recurring) VALUES (?, ?, ?)")
            .bind(&event.name)
            .bind(timestamp::format(&event.date))
            .bind(event.recurring)
            .execute(&self.pool)
            .await?;

        let id = EventId::new(result.last_insert_rowid());
        tracing::debug!(event_id = %id, name = %event.name, "event inserted");
        Ok(Event::from_new(id, event))
    }

    async fn update_event(&self, event: &Event) -> Result<(), ReminderError> {
        let result =
            sqlx::query("UPDATE events SET name = ?, date = ?, recurring = ? WHERE id = ?")
                .bind(&event.name)
                .bind(timestamp::format(&event.date))
                .bind(event.recurring)
                .bind(event.id.get())
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(ReminderError::EventNotFound(event.id));
        }
        Ok(())
    }

    async fn delete_event(&self, id: EventId) -> Result<(), ReminderError> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ReminderError::EventNotFound(id));
        }
        Ok(())
    }

    async fn init(&self) -> Result<(), ReminderError> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
