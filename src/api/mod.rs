//! REST API layer: route handlers, DTOs, authentication and router
//! composition.
//!
//! `/events` routes sit behind the API key check; `/health` and the
//! OpenAPI endpoints do not.

pub mod auth;
pub mod dto;
pub mod handlers;
pub mod openapi;

use axum::Router;
use axum::middleware;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router(state: AppState) -> Router {
    let events = handlers::events::routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth::require_api_key,
    ));

    let router = Router::new()
        .merge(events)
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
    };

    router.with_state(state)
}
