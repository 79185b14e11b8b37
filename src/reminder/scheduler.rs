//! Daily reminder loop.
//!
//! The loop runs its first batch immediately, then waits a fixed interval
//! or a stop signal, whichever comes first. There is no catch-up for missed
//! runs and no record of the last run, so a restart within the same day
//! sends the same reminders again.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, Local};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::notifier::Notifier;
use super::selector::select_due;
use crate::error::ReminderError;
use crate::service::EventService;

/// Interval between reminder batches.
pub const DAILY: Duration = Duration::from_secs(24 * 60 * 60);

/// Outcome of one reminder batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Events selected as due.
    pub due: usize,
    /// Reminders delivered.
    pub sent: usize,
    /// Reminders whose delivery failed.
    pub failed: usize,
}

/// Drives selection and notification once per interval.
#[derive(Debug)]
pub struct DailyScheduler {
    events: Arc<EventService>,
    notifier: Arc<Notifier>,
    interval: Duration,
}

impl DailyScheduler {
    /// Creates a scheduler running every [`DAILY`].
    #[must_use]
    pub fn new(events: Arc<EventService>, notifier: Arc<Notifier>) -> Self {
        Self::with_interval(events, notifier, DAILY)
    }

    /// Creates a scheduler with a custom interval.
    #[must_use]
    pub fn with_interval(
        events: Arc<EventService>,
        notifier: Arc<Notifier>,
        interval: Duration,
    ) -> Self {
        Self {
            events,
            notifier,
            interval,
        }
    }

    /// Runs a single batch at `now`.
    ///
    /// Events are notified sequentially; a failed notification is counted
    /// and the batch moves on.
    ///
    /// # Errors
    ///
    /// Returns the store error if the events cannot be fetched, in which
    /// case no notification is attempted.
    pub async fn run_once(&self, now: DateTime<FixedOffset>) -> Result<BatchReport, ReminderError> {
        let events = self.events.list_events().await.inspect_err(|e| {
            tracing::error!(error = %e, "failed to fetch events for reminders");
        })?;

        let due = select_due(&events, now);
        let mut report = BatchReport {
            due: due.len(),
            ..BatchReport::default()
        };

        for event in due {
            match self.notifier.notify_one(event, now).await {
                Ok(()) => report.sent += 1,
                Err(_) => report.failed += 1,
            }
        }

        tracing::info!(
            total = events.len(),
            due = report.due,
            sent = report.sent,
            failed = report.failed,
            "reminder batch finished"
        );
        Ok(report)
    }

    /// Loops until `stop` changes or its sender is dropped.
    pub async fn run(&self, mut stop: watch::Receiver<bool>) {
        tracing::info!(interval_secs = self.interval.as_secs(), "reminder scheduler started");
        loop {
            // Failures are logged inside run_once; the next cycle retries.
            let _ = self.run_once(Local::now().fixed_offset()).await;

            tokio::select! {
                () = tokio::time::sleep(self.interval) => {}
                _ = stop.changed() => break,
            }
        }
        tracing::info!("reminder scheduler stopped");
    }

    /// Spawns the loop onto the tokio runtime.
    #[must_use]
    pub fn spawn(self) -> SchedulerHandle {
        let (stop, stop_rx) = watch::channel(false);
        let task = tokio::spawn(async move { self.run(stop_rx).await });
        SchedulerHandle { stop, task }
    }
}

/// Handle to a spawned [`DailyScheduler`].
#[derive(Debug)]
pub struct SchedulerHandle {
    stop: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SchedulerHandle {
    /// Signals the loop to stop and waits for it to exit.
    ///
    /// An in-flight batch is finished first.
    pub async fn stop(self) {
        let _ = self.stop.send(true);
        if let Err(e) = self.task.await {
            tracing::warn!(error = %e, "reminder scheduler task did not exit cleanly");
        }
    }
}
