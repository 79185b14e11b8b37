//! In-crate doubles for the store and mailer seams.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use tokio::sync::Mutex;

use crate::domain::{Event, EventId, NewEvent, timestamp};
use crate::error::ReminderError;
use crate::mail::{Mailer, ReminderEmail};
use crate::persistence::EventStore;

#[allow(clippy::panic)]
pub(crate) fn at(raw: &str) -> DateTime<FixedOffset> {
    let Ok(date) = timestamp::parse(raw) else {
        panic!("valid timestamp: {raw}");
    };
    date
}

pub(crate) fn event(id: i64, name: &str, date: DateTime<FixedOffset>, recurring: bool) -> Event {
    Event {
        id: EventId::new(id),
        name: name.to_string(),
        date,
        recurring,
    }
}

/// Records every attempt; fails sends whose subject mentions one of
/// `failing` names.
#[derive(Debug, Default)]
pub(crate) struct RecordingMailer {
    failing: Vec<String>,
    attempts: Mutex<Vec<ReminderEmail>>,
}

impl RecordingMailer {
    pub(crate) fn failing_for(names: &[&str]) -> Self {
        Self {
            failing: names.iter().map(|n| (*n).to_string()).collect(),
            attempts: Mutex::default(),
        }
    }

    pub(crate) async fn attempts(&self) -> Vec<ReminderEmail> {
        self.attempts.lock().await.clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &ReminderEmail) -> Result<(), ReminderError> {
        self.attempts.lock().await.push(email.clone());
        if self.failing.iter().any(|name| email.subject.contains(name.as_str())) {
            return Err(ReminderError::Notification("connection refused".to_string()));
        }
        Ok(())
    }
}

/// Read-only store over a fixed list; counts fetches.
#[derive(Debug, Default)]
pub(crate) struct StaticStore {
    events: Vec<Event>,
    fetches: AtomicUsize,
}

impl StaticStore {
    pub(crate) fn new(events: Vec<Event>) -> Self {
        Self {
            events,
            fetches: AtomicUsize::new(0),
        }
    }

    pub(crate) fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

fn read_only() -> ReminderError {
    ReminderError::Storage("read-only store".to_string())
}

#[async_trait]
impl EventStore for StaticStore {
    async fn get_events(&self) -> Result<Vec<Event>, ReminderError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.events.clone())
    }

    async fn get_event_by_id(&self, id: EventId) -> Result<Event, ReminderError> {
        self.events
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(ReminderError::EventNotFound(id))
    }

    async fn add_event(&self, _event: NewEvent) -> Result<Event, ReminderError> {
        Err(read_only())
    }

    async fn update_event(&self, _event: &Event) -> Result<(), ReminderError> {
        Err(read_only())
    }

    async fn delete_event(&self, _id: EventId) -> Result<(), ReminderError> {
        Err(read_only())
    }

    async fn init(&self) -> Result<(), ReminderError> {
        Ok(())
    }

    async fn close(&self) {}
}

/// Store whose every operation fails; counts fetches.
#[derive(Debug, Default)]
pub(crate) struct FailingStore {
    fetches: AtomicUsize,
}

impl FailingStore {
    pub(crate) fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

fn unavailable() -> ReminderError {
    ReminderError::Storage("database is locked".to_string())
}

#[async_trait]
impl EventStore for FailingStore {
    async fn get_events(&self) -> Result<Vec<Event>, ReminderError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Err(unavailable())
    }

    async fn get_event_by_id(&self, _id: EventId) -> Result<Event, ReminderError> {
        Err(unavailable())
    }

    async fn add_event(&self, _event: NewEvent) -> Result<Event, ReminderError> {
        Err(unavailable())
    }

    async fn update_event(&self, _event: &Event) -> Result<(), ReminderError> {
        Err(unavailable())
    }

    async fn delete_event(&self, _id: EventId) -> Result<(), ReminderError> {
        Err(unavailable())
    }

    async fn init(&self) -> Result<(), ReminderError> {
        Err(unavailable())
    }

    async fn close(&self) {}
}
