//! # reminders-api
//!
//! REST service that stores dated events and emails reminders for the
//! ones coming up this week or recurring today.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, X-API-Key)          DailyScheduler (every 24h)
//!     │                                  │
//!     ├── REST Handlers (api/)           ├── selector (reminder/)
//!     │                                  ├── Notifier ──► Mailer (mail/)
//!     └──────────┬───────────────────────┘
//!                │
//!          EventService (service/)
//!                │
//!          EventStore ──► SQLite (persistence/)
//! ```
//!
//! All components are built once in `main` and handed to whoever needs
//! them; there is no global state.

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod mail;
pub mod persistence;
pub mod reminder;
pub mod service;

#[cfg(test)]
mod test_support;
