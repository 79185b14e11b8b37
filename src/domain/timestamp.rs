//! Wire format for event timestamps.
//!
//! Dates are exchanged and persisted as RFC 3339 text with an explicit UTC
//! offset (e.g. `2024-03-15T09:00:00+01:00`). Parsing goes through
//! `parse_from_rfc3339` only, so naive timestamps and bare dates are
//! rejected.

use chrono::{DateTime, FixedOffset, SecondsFormat};

use crate::error::ReminderError;

/// Parses an RFC 3339 timestamp.
///
/// # Errors
///
/// Returns [`ReminderError::Validation`] when `raw` is not valid RFC 3339.
pub fn parse(raw: &str) -> Result<DateTime<FixedOffset>, ReminderError> {
    DateTime::parse_from_rfc3339(raw)
        .map_err(|e| ReminderError::Validation(format!("invalid date {raw:?}: {e}")))
}

/// Formats a timestamp in the canonical wire format.
#[must_use]
pub fn format(date: &DateTime<FixedOffset>) -> String {
    date.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn keeps_offset_on_round_trip() {
        let raw = "2024-03-15T09:30:00+01:00";
        let Ok(date) = parse(raw) else {
            panic!("valid timestamp");
        };
        assert_eq!(format(&date), raw);
    }

    #[test]
    fn utc_is_written_as_numeric_offset() {
        let Ok(date) = parse("2024-03-15T09:30:00Z") else {
            panic!("valid timestamp");
        };
        assert_eq!(format(&date), "2024-03-15T09:30:00+00:00");
    }

    #[test]
    fn rejects_missing_offset() {
        assert!(parse("2024-03-15T09:30:00").is_err());
    }

    #[test]
    fn rejects_date_only() {
        assert!(parse("2024-03-15").is_err());
    }
}
