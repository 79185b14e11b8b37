//! Reminder pipeline: decide which events are due, compose the emails,
//! and drive both once a day.
//!
//! ```text
//! DailyScheduler ──► EventService::list_events
//!        │
//!        ├──► selector::select_due(events, now)
//!        │
//!        └──► Notifier::notify_one(event, now) ──► Mailer
//! ```

pub mod notifier;
pub mod scheduler;
pub mod selector;

pub use notifier::Notifier;
pub use scheduler::{BatchReport, DailyScheduler, SchedulerHandle};
pub use selector::{Reminder, classify, days_until, select_due};
