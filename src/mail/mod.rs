//! Outbound email: the [`Mailer`] seam and its SMTP implementation.

pub mod smtp;

use async_trait::async_trait;

use crate::error::ReminderError;

pub use smtp::SmtpMailer;

/// A composed plain-text reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderEmail {
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

/// Delivers a reminder to the configured recipient.
///
/// Implementations make exactly one delivery attempt per call and report
/// any failure as [`ReminderError::Notification`].
#[async_trait]
pub trait Mailer: Send + Sync + std::fmt::Debug {
    /// Sends `email` once.
    async fn send(&self, email: &ReminderEmail) -> Result<(), ReminderError>;
}
