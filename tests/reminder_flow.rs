//! End-to-end reminder batch over a real SQLite store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, FixedOffset};
use tokio::sync::Mutex;
use tokio_test::{assert_err, assert_ok};

use reminders_api::domain::timestamp;
use reminders_api::error::ReminderError;
use reminders_api::mail::{Mailer, ReminderEmail};
use reminders_api::persistence::seed::seed_if_empty;
use reminders_api::persistence::{EventStore, SqliteEventStore};
use reminders_api::reminder::{BatchReport, DailyScheduler, Notifier};
use reminders_api::service::EventService;

#[derive(Debug, Default)]
struct Outbox {
    refuse: Option<&'static str>,
    sent: Mutex<Vec<ReminderEmail>>,
}

#[async_trait]
impl Mailer for Outbox {
    async fn send(&self, email: &ReminderEmail) -> Result<(), ReminderError> {
        if self.refuse.is_some_and(|name| email.subject.ends_with(name)) {
            return Err(ReminderError::Notification("535 authentication failed".to_string()));
        }
        self.sent.lock().await.push(email.clone());
        Ok(())
    }
}

fn at(raw: &str) -> DateTime<FixedOffset> {
    assert_ok!(timestamp::parse(raw))
}

async fn make_service() -> Arc<EventService> {
    let store = assert_ok!(SqliteEventStore::in_memory().await);
    assert_ok!(store.init().await);
    Arc::new(EventService::new(Arc::new(store)))
}

#[tokio::test]
async fn daily_batch_emails_due_events_only() {
    let now = at("2024-05-15T08:00:00+00:00");
    let service = make_service().await;
    assert_ok!(service.create_event("Rent", now + Duration::days(5), false).await);
    assert_ok!(service.create_event("Birthday", at("1992-01-15T00:00:00+00:00"), true).await);
    assert_ok!(service.create_event("Past", now - Duration::days(2), false).await);
    assert_ok!(service.create_event("Vacation", now + Duration::days(40), false).await);

    let outbox = Arc::new(Outbox::default());
    let scheduler = DailyScheduler::new(
        Arc::clone(&service),
        Arc::new(Notifier::new(Arc::clone(&outbox) as Arc<dyn Mailer>)),
    );

    let report = assert_ok!(scheduler.run_once(now).await);
    assert_eq!(
        report,
        BatchReport {
            due: 2,
            sent: 2,
            failed: 0
        }
    );

    let bodies: Vec<String> = outbox.sent.lock().await.iter().map(|m| m.body.clone()).collect();
    assert_eq!(
        bodies,
        ["Reminder: 5 days until Rent", "Today is your Birthday!"]
    );
}

#[tokio::test]
async fn refused_delivery_does_not_block_the_rest() {
    let now = at("2024-05-15T08:00:00+00:00");
    let service = make_service().await;
    assert_ok!(service.create_event("Rent", now + Duration::days(1), false).await);
    assert_ok!(service.create_event("Dentist", now + Duration::hours(3), false).await);

    let outbox = Arc::new(Outbox {
        refuse: Some("Rent"),
        ..Outbox::default()
    });
    let scheduler = DailyScheduler::new(
        Arc::clone(&service),
        Arc::new(Notifier::new(Arc::clone(&outbox) as Arc<dyn Mailer>)),
    );

    let report = assert_ok!(scheduler.run_once(now).await);
    assert_eq!(report.failed, 1);
    assert_eq!(report.sent, 1);

    let sent = outbox.sent.lock().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent.first().map(|m| m.body.as_str()),
        Some("Reminder: Dentist is today!")
    );
}

#[tokio::test]
async fn closed_store_fails_the_batch_without_sending() {
    let store = assert_ok!(SqliteEventStore::in_memory().await);
    assert_ok!(store.init().await);
    store.close().await;

    let service = Arc::new(EventService::new(Arc::new(store)));
    let outbox = Arc::new(Outbox::default());
    let scheduler = DailyScheduler::new(
        service,
        Arc::new(Notifier::new(Arc::clone(&outbox) as Arc<dyn Mailer>)),
    );

    assert_err!(scheduler.run_once(at("2024-05-15T08:00:00+00:00")).await);
    assert!(outbox.sent.lock().await.is_empty());
}

#[tokio::test]
async fn bundled_seed_file_loads() {
    let store = assert_ok!(SqliteEventStore::in_memory().await);
    assert_ok!(store.init().await);
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("initial_events.json");

    let count = assert_ok!(seed_if_empty(&store, &path).await);
    assert!(count > 0);
    let events = assert_ok!(store.get_events().await);
    assert_eq!(events.len(), count);
}
