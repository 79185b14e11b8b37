//! Reminder composition and delivery.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset};

use super::selector::{Reminder, classify, days_until};
use crate::domain::Event;
use crate::error::ReminderError;
use crate::mail::{Mailer, ReminderEmail};

/// Composes the reminder email for `event` as seen at `now`.
///
/// The body follows [`classify`]. Events it does not select still get a
/// well-defined body: a recurring one keeps its "Today is your" wording and
/// a one-time one states its distance in days, ahead or ago.
#[must_use]
pub fn compose(event: &Event, now: DateTime<FixedOffset>) -> ReminderEmail {
    let name = &event.name;
    let body = match classify(event, now) {
        Some(Reminder::Recurring) => format!("Today is your {name}!"),
        Some(Reminder::Today) => format!("Reminder: {name} is today!"),
        Some(Reminder::Upcoming { days: 1 }) => format!("Reminder: 1 day until {name}"),
        Some(Reminder::Upcoming { days }) => format!("Reminder: {days} days until {name}"),
        None => unscheduled_body(event, now),
    };
    ReminderEmail {
        subject: format!("Reminder: {name}"),
        body,
    }
}

fn unscheduled_body(event: &Event, now: DateTime<FixedOffset>) -> String {
    let name = &event.name;
    if event.recurring {
        return format!("Today is your {name}!");
    }
    match days_until(event.date, now) {
        days if days > 0 => format!("Reminder: {days} days until {name}"),
        days => format!("Reminder: {name} was {} days ago", -days),
    }
}

/// Sends one reminder per event through a [`Mailer`].
#[derive(Debug, Clone)]
pub struct Notifier {
    mailer: Arc<dyn Mailer>,
}

impl Notifier {
    /// Creates a notifier delivering through `mailer`.
    #[must_use]
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }

    /// Composes and sends the reminder for `event`.
    ///
    /// A failure is logged here and returned; the caller decides whether
    /// to continue with other events.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderError::Notification`] if delivery fails.
    pub async fn notify_one(
        &self,
        event: &Event,
        now: DateTime<FixedOffset>,
    ) -> Result<(), ReminderError> {
        let email = compose(event, now);
        match self.mailer.send(&email).await {
            Ok(()) => {
                tracing::info!(event_id = %event.id, name = %event.name, "reminder sent");
                Ok(())
            }
            Err(e) => {
                tracing::error!(event_id = %event.id, name = %event.name, error = %e, "reminder failed");
                Err(e)
            }
        }
    }
}
