//! Event CRUD handlers: list, get, create, replace, delete.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{EventRequest, EventResponse};
use crate::app_state::AppState;
use crate::domain::EventId;
use crate::error::{ErrorResponse, ReminderError};

/// `GET /events`: List all events.
///
/// # Errors
///
/// Returns [`ReminderError::Storage`] on store failure.
#[utoipa::path(
    get,
    path = "/events",
    tag = "Events",
    summary = "List events",
    description = "Returns every stored event in creation order.",
    security(("api_key" = [])),
    responses(
        (status = 200, description = "All events", body = Vec<EventResponse>),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
    )
)]
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ReminderError> {
    let events = state.event_service.list_events().await?;
    let data: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();
    Ok(Json(data))
}

/// `GET /events/{id}`: Get a single event.
///
/// # Errors
///
/// Returns [`ReminderError::EventNotFound`] if the event does not exist.
#[utoipa::path(
    get,
    path = "/events/{id}",
    tag = "Events",
    summary = "Get an event",
    security(("api_key" = [])),
    params(
        ("id" = i64, Path, description = "Event id"),
    ),
    responses(
        (status = 200, description = "Event", body = EventResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ReminderError> {
    let id: EventId = id.parse()?;
    let event = state.event_service.get_event(id).await?;
    Ok(Json(EventResponse::from(event)))
}

/// `POST /events`: Create an event.
///
/// # Errors
///
/// Returns [`ReminderError::Validation`] on a malformed body.
#[utoipa::path(
    post,
    path = "/events",
    tag = "Events",
    summary = "Create an event",
    description = "Stores a new event. The id is assigned by the server.",
    security(("api_key" = [])),
    request_body = EventRequest,
    responses(
        (status = 201, description = "Event created", body = EventResponse),
        (status = 400, description = "Malformed body or date", body = ErrorResponse),
    )
)]
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<EventRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ReminderError> {
    let new = parse_body(payload)?;
    let event = state
        .event_service
        .create_event(&new.name, new.date, new.recurring)
        .await?;
    Ok((StatusCode::CREATED, Json(EventResponse::from(event))))
}

/// `PUT /events/{id}`: Replace an event.
///
/// # Errors
///
/// Returns [`ReminderError::Validation`] on a malformed id or body, and
/// [`ReminderError::EventNotFound`] if the event does not exist.
#[utoipa::path(
    put,
    path = "/events/{id}",
    tag = "Events",
    summary = "Replace an event",
    description = "Overwrites name, date and recurrence; the id is kept.",
    security(("api_key" = [])),
    params(
        ("id" = i64, Path, description = "Event id"),
    ),
    request_body = EventRequest,
    responses(
        (status = 200, description = "Event replaced", body = EventResponse),
        (status = 400, description = "Malformed id, body or date", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn replace_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EventRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ReminderError> {
    let id: EventId = id.parse()?;
    let new = parse_body(payload)?;
    let event = state
        .event_service
        .replace_event(id, &new.name, new.date, new.recurring)
        .await?;
    Ok(Json(EventResponse::from(event)))
}

/// `DELETE /events/{id}`: Delete an event.
///
/// # Errors
///
/// Returns [`ReminderError::EventNotFound`] if the event does not exist.
#[utoipa::path(
    delete,
    path = "/events/{id}",
    tag = "Events",
    summary = "Delete an event",
    security(("api_key" = [])),
    params(
        ("id" = i64, Path, description = "Event id"),
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ReminderError> {
    let id: EventId = id.parse()?;
    state.event_service.delete_event(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Event routes. Authentication is layered on by the caller.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/{id}",
            get(get_event).put(replace_event).delete(delete_event),
        )
}

fn parse_body(
    payload: Result<Json<EventRequest>, JsonRejection>,
) -> Result<crate::domain::NewEvent, ReminderError> {
    let Json(req) = payload.map_err(|e| ReminderError::Validation(e.body_text()))?;
    req.into_new_event()
}
