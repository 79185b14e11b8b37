//! Service layer: business logic orchestration.
//!
//! [`EventService`] is the stable interface that both the HTTP handlers
//! and the reminder scheduler use to reach the event store.

pub mod event_service;

pub use event_service::EventService;
