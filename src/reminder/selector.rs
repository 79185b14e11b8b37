//! Due-date selection.
//!
//! Recurring events match on day-of-month only, so they come due every
//! month, not once a year. One-time events come due during the seven
//! days leading up to their date, counting whole 24-hour periods and
//! truncating toward zero. Nothing is remembered between runs: an event
//! three days out is selected again on each of the following days.

use chrono::{DateTime, Datelike, FixedOffset};

use crate::domain::Event;

/// How far ahead one-time events are announced, in days.
pub const LOOKAHEAD_DAYS: i64 = 7;

/// The kind of reminder an event warrants today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reminder {
    /// A recurring event whose day-of-month is today.
    Recurring,
    /// A one-time event `days` whole days away (1..=7).
    Upcoming {
        /// Whole days remaining.
        days: i64,
    },
    /// A one-time event less than 24 hours away, or less than 24 hours past.
    Today,
}

/// Whole days from `now` until `date`: the signed hour difference divided
/// by 24, truncated toward zero.
#[must_use]
pub fn days_until(date: DateTime<FixedOffset>, now: DateTime<FixedOffset>) -> i64 {
    (date - now).num_hours() / 24
}

/// Returns the reminder `event` warrants at `now`, or `None` if it is not
/// due.
#[must_use]
pub fn classify(event: &Event, now: DateTime<FixedOffset>) -> Option<Reminder> {
    if event.recurring {
        return (now.day() == event.date.day()).then_some(Reminder::Recurring);
    }
    match days_until(event.date, now) {
        0 => Some(Reminder::Today),
        days @ 1..=LOOKAHEAD_DAYS => Some(Reminder::Upcoming { days }),
        _ => None,
    }
}

/// Filters `events` down to those due for a reminder at `now`, keeping
/// input order.
#[must_use]
pub fn select_due(events: &[Event], now: DateTime<FixedOffset>) -> Vec<&Event> {
    events
        .iter()
        .filter(|event| classify(event, now).is_some())
        .collect()
}
