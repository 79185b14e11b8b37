//! Service error types with HTTP status code mapping.
//!
//! [`ReminderError`] is the central error type. Each variant maps to a
//! specific HTTP status code and structured JSON error response; the
//! scheduler logs the same variants instead of returning them.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::EventId;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "event not found: 42"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see [`ReminderError::error_code`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status               |
/// |-----------|-----------------|---------------------------|
/// | 1000–1999 | Validation/Auth | 400 Bad Request / 401     |
/// | 2000–2999 | Not Found       | 404 Not Found             |
/// | 3000–3999 | Server          | 500 Internal Server Error |
/// | 5000–5999 | Notification    | 502 Bad Gateway           |
#[derive(Debug, thiserror::Error)]
pub enum ReminderError {
    /// No event with the given id exists.
    #[error("event not found: {0}")]
    EventNotFound(EventId),

    /// Malformed input rejected before reaching the store.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The `X-API-Key` header is missing or wrong.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Storage I/O, connection or query failure.
    #[error("storage error: {0}")]
    Storage(String),

    /// Reminder email could not be built or delivered.
    #[error("notification error: {0}")]
    Notification(String),
}

impl ReminderError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Validation(_) => 1001,
            Self::Unauthorized(_) => 1002,
            Self::EventNotFound(_) => 2001,
            Self::Storage(_) => 3001,
            Self::Notification(_) => 5001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::EventNotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Notification(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<sqlx::Error> for ReminderError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl IntoResponse for ReminderError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
