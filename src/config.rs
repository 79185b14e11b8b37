//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). The mail credentials and the API key
//! are mandatory; the process refuses to start without them.

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Startup configuration failure. Always fatal.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("missing required configuration: {0}")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed.
    #[error("invalid value for {key}: {reason}")]
    Invalid {
        /// Environment variable name.
        key: &'static str,
        /// Parser message.
        reason: String,
    },
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`ReminderConfig::from_env`].
#[derive(Clone)]
pub struct ReminderConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8080`).
    pub listen_addr: SocketAddr,

    /// Path of the SQLite database file.
    pub db_path: String,

    /// Maximum number of database connections in the pool.
    pub database_max_connections: u32,

    /// Sender address and SMTP username.
    pub email_from: String,

    /// Recipient of every reminder.
    pub email_to: String,

    /// SMTP password for `email_from`.
    pub email_password: String,

    /// SMTP relay host.
    pub smtp_host: String,

    /// SMTP submission port (STARTTLS).
    pub smtp_port: u16,

    /// Static key expected in the `X-API-Key` header.
    pub api_key: String,

    /// JSON file with initial events, loaded when the store is empty.
    pub seed_file: PathBuf,
}

impl fmt::Debug for ReminderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReminderConfig")
            .field("listen_addr", &self.listen_addr)
            .field("db_path", &self.db_path)
            .field("database_max_connections", &self.database_max_connections)
            .field("email_from", &self.email_from)
            .field("email_to", &self.email_to)
            .field("email_password", &"<redacted>")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("api_key", &"<redacted>")
            .field("seed_file", &self.seed_file)
            .finish()
    }
}

impl ReminderConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file,
    /// then delegates to [`ReminderConfig::from_lookup`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a required variable is empty or a
    /// value cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        if dotenvy::dotenv().is_err() {
            tracing::debug!("no .env file found, using process environment");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Unset and empty values are treated alike.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a required key is empty or a value
    /// cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let listen_addr: SocketAddr = get("LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                key: "LISTEN_ADDR",
                reason: e.to_string(),
            })?;

        let smtp_port: u16 = match get("SMTP_PORT") {
            Some(raw) => raw.parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                key: "SMTP_PORT",
                reason: e.to_string(),
            })?,
            None => 587,
        };

        Ok(Self {
            listen_addr,
            db_path: get("DB_PATH").unwrap_or_else(|| "reminder.db".to_string()),
            database_max_connections: get("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            email_from: required("EMAIL_FROM")?,
            email_to: required("EMAIL_TO")?,
            email_password: required("EMAIL_PASSWORD")?,
            smtp_host: get("SMTP_HOST").unwrap_or_else(|| "smtp.gmail.com".to_string()),
            smtp_port,
            api_key: required("API_KEY")?,
            seed_file: PathBuf::from(
                get("SEED_FILE").unwrap_or_else(|| "initial_events.json".to_string()),
            ),
        })
    }
}
