//! Initial event import.
//!
//! The seed file is a JSON document of the form
//! `{"events": [{"name": "...", "date": "<RFC 3339>", "recurring": false}]}`.
//! It is only consulted when the store is empty.

use std::path::Path;

use serde::Deserialize;

use super::EventStore;
use crate::domain::{NewEvent, timestamp};
use crate::error::ReminderError;

#[derive(Debug, Deserialize)]
struct SeedFile {
    events: Vec<SeedEvent>,
}

#[derive(Debug, Deserialize)]
struct SeedEvent {
    name: String,
    date: String,
    #[serde(default)]
    recurring: bool,
}

/// Imports the seed file into `store` if the store holds no events.
///
/// Entries with an unparseable date or an empty name, and entries the
/// store rejects, are logged and skipped. Returns the number of events
/// inserted (zero when the store already had data).
///
/// # Errors
///
/// Returns [`ReminderError::Storage`] if the store cannot be listed or the
/// file cannot be read, and [`ReminderError::Validation`] if the file is
/// not a valid seed document.
pub async fn seed_if_empty(store: &dyn EventStore, path: &Path) -> Result<usize, ReminderError> {
    if !store.get_events().await?.is_empty() {
        tracing::debug!("store already populated, skipping seed");
        return Ok(0);
    }

    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        ReminderError::Storage(format!("cannot read seed file {}: {e}", path.display()))
    })?;
    let seed: SeedFile = serde_json::from_str(&raw).map_err(|e| {
        ReminderError::Validation(format!("malformed seed file {}: {e}", path.display()))
    })?;

    let mut inserted = 0;
    for entry in seed.events {
        let new = match timestamp::parse(&entry.date)
            .and_then(|date| NewEvent::new(entry.name.as_str(), date, entry.recurring))
        {
            Ok(new) => new,
            Err(e) => {
                tracing::warn!(name = %entry.name, error = %e, "skipping seed entry");
                continue;
            }
        };
        match store.add_event(new).await {
            Ok(event) => {
                inserted += 1;
                tracing::info!(event_id = %event.id, name = %event.name, "seeded event");
            }
            Err(e) => tracing::warn!(name = %entry.name, error = %e, "failed to seed event"),
        }
    }

    Ok(inserted)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::persistence::SqliteEventStore;

    async fn make_store() -> SqliteEventStore {
        let Ok(store) = SqliteEventStore::in_memory().await else {
            panic!("in-memory sqlite should open");
        };
        let Ok(()) = store.init().await else {
            panic!("schema creation failed");
        };
        store
    }

    fn seed_file(contents: &str) -> tempfile::NamedTempFile {
        let Ok(mut file) = tempfile::NamedTempFile::new() else {
            panic!("temp file");
        };
        let Ok(()) = file.write_all(contents.as_bytes()) else {
            panic!("write seed");
        };
        file
    }

    #[tokio::test]
    async fn seeds_empty_store_and_skips_bad_entries() {
        let store = make_store().await;
        let file = seed_file(
            r#"{"events": [
                {"name": "Birthday", "date": "1990-04-12T00:00:00+00:00", "recurring": true},
                {"name": "Broken", "date": "someday", "recurring": false},
                {"name": "  ", "date": "2025-02-01T00:00:00+00:00", "recurring": false},
                {"name": "Taxes", "date": "2025-04-30T23:59:00-04:00", "recurring": false}
            ]}"#,
        );

        let Ok(count) = seed_if_empty(&store, file.path()).await else {
            panic!("seed failed");
        };
        assert_eq!(count, 2);

        let Ok(events) = store.get_events().await else {
            panic!("list failed");
        };
        let names: Vec<&str> = events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Birthday", "Taxes"]);
    }

    #[tokio::test]
    async fn populated_store_is_left_alone() {
        let store = make_store().await;
        let file = seed_file(
            r#"{"events": [{"name": "Once", "date": "2025-01-01T00:00:00+00:00"}]}"#,
        );
        let _ = seed_if_empty(&store, file.path()).await;

        let Ok(count) = seed_if_empty(&store, file.path()).await else {
            panic!("second seed failed");
        };
        assert_eq!(count, 0);
        let Ok(events) = store.get_events().await else {
            panic!("list failed");
        };
        assert_eq!(events.len(), 1);
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let store = make_store().await;
        let result = seed_if_empty(&store, Path::new("/definitely/not/here.json")).await;
        assert!(matches!(result, Err(ReminderError::Storage(_))));
    }

    #[tokio::test]
    async fn malformed_document_is_a_validation_error() {
        let store = make_store().await;
        let file = seed_file("[1, 2, 3]");
        let result = seed_if_empty(&store, file.path()).await;
        assert!(matches!(result, Err(ReminderError::Validation(_))));
    }
}
