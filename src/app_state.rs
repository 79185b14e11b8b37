//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::EventService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Event service for all CRUD operations.
    pub event_service: Arc<EventService>,
    /// Key every `/events` request must present in `X-API-Key`.
    pub api_key: Arc<str>,
}

impl AppState {
    /// Creates the state from its parts.
    #[must_use]
    pub fn new(event_service: Arc<EventService>, api_key: impl Into<Arc<str>>) -> Self {
        Self {
            event_service,
            api_key: api_key.into(),
        }
    }
}
