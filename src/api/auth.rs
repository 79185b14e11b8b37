//! Static API key authentication.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::app_state::AppState;
use crate::error::ReminderError;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Rejects requests whose `X-API-Key` header is missing or differs from
/// the configured key.
///
/// # Errors
///
/// Returns [`ReminderError::Unauthorized`] when the key is missing or wrong.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ReminderError> {
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .map(|v| v.as_bytes())
        .filter(|v| !v.is_empty());

    // Compared as raw bytes: a non-ASCII value is a wrong key, not a missing one.
    let authorized = match presented {
        None => return Err(ReminderError::Unauthorized("API key is missing".to_string())),
        Some(key) => key == state.api_key.as_bytes(),
    };
    if !authorized {
        tracing::warn!(path = %request.uri().path(), "rejected request with invalid API key");
        return Err(ReminderError::Unauthorized("invalid API key".to_string()));
    }
    Ok(next.run(request).await)
}
