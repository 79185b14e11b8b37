//! OpenAPI document for the REST surface.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use super::handlers::{events, system};

/// Generated OpenAPI description, served by Swagger UI when the
/// `swagger-ui` feature is enabled.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "reminders-api", description = "Dated events with daily email reminders"),
    paths(
        events::list_events,
        events::get_event,
        events::create_event,
        events::replace_event,
        events::delete_event,
        system::health_handler,
    ),
    modifiers(&ApiKeyScheme),
    tags(
        (name = "Events", description = "Event CRUD, authenticated with X-API-Key"),
        (name = "System", description = "Operational endpoints"),
    )
)]
pub struct ApiDoc;

#[derive(Debug)]
struct ApiKeyScheme;

impl Modify for ApiKeyScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_key",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-API-Key"))),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_event_paths_and_scheme() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/events"));
        assert!(doc.paths.paths.contains_key("/events/{id}"));
        assert!(doc.paths.paths.contains_key("/health"));
        let has_scheme = doc
            .components
            .as_ref()
            .is_some_and(|c| c.security_schemes.contains_key("api_key"));
        assert!(has_scheme);
    }
}
