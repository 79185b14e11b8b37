//! System endpoints: health check.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
    /// Stored events; absent when the store is unreachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    events: Option<usize>,
}

/// `GET /health`: Service health status.
///
/// Lists the store so a broken database shows up as `503 degraded`.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service status, version, current timestamp and the number of stored events. Does not require an API key.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Event store unreachable", body = HealthResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let (code, status, events) = match state.event_service.list_events().await {
        Ok(events) => (StatusCode::OK, "healthy", Some(events.len())),
        Err(e) => {
            tracing::warn!(error = %e, "health check could not reach the event store");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", None)
        }
    };
    (
        code,
        Json(HealthResponse {
            status: status.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            events,
        }),
    )
}

/// System routes, mounted without authentication.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
