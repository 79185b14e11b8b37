//! SMTP delivery via `lettre`.

use std::fmt;

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::{Mailer, ReminderEmail};
use crate::config::ReminderConfig;
use crate::error::ReminderError;

/// Authenticated STARTTLS mailer sending from one fixed sender to one
/// fixed recipient.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
    from: Mailbox,
    to: Mailbox,
}

impl fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("host", &self.host)
            .field("from", &self.from.to_string())
            .field("to", &self.to.to_string())
            .finish_non_exhaustive()
    }
}

impl SmtpMailer {
    /// Builds a mailer for `host:port`, authenticating as `from`.
    ///
    /// No connection is opened until the first send.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderError::Notification`] if an address does not
    /// parse or the TLS parameters for `host` cannot be built.
    pub fn new(
        host: &str,
        port: u16,
        from: &str,
        to: &str,
        password: &str,
    ) -> Result<Self, ReminderError> {
        let from_box = parse_mailbox(from)?;
        let to_box = parse_mailbox(to)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .map_err(|e| ReminderError::Notification(format!("smtp relay {host}: {e}")))?
            .port(port)
            .credentials(Credentials::new(from.to_string(), password.to_string()))
            .build();

        Ok(Self {
            transport,
            host: host.to_string(),
            from: from_box,
            to: to_box,
        })
    }

    /// Builds a mailer from the service configuration.
    ///
    /// # Errors
    ///
    /// See [`SmtpMailer::new`].
    pub fn from_config(config: &ReminderConfig) -> Result<Self, ReminderError> {
        Self::new(
            &config.smtp_host,
            config.smtp_port,
            &config.email_from,
            &config.email_to,
            &config.email_password,
        )
    }

    /// Builds the MIME message for `email`.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderError::Notification`] if the message cannot be
    /// assembled.
    pub fn build_message(&self, email: &ReminderEmail) -> Result<Message, ReminderError> {
        Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(email.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(email.body.clone())
            .map_err(|e| ReminderError::Notification(format!("cannot build message: {e}")))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &ReminderEmail) -> Result<(), ReminderError> {
        let message = self.build_message(email)?;
        self.transport
            .send(message)
            .await
            .map_err(|e| ReminderError::Notification(format!("smtp send via {}: {e}", self.host)))?;
        Ok(())
    }
}

fn parse_mailbox(raw: &str) -> Result<Mailbox, ReminderError> {
    raw.parse()
        .map_err(|e| ReminderError::Notification(format!("invalid email address {raw:?}: {e}")))
}
