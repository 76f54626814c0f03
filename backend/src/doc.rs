//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the REST API. It registers:
//!
//! - **Paths**: every catalogue endpoint under `/api/v1` plus health probes
//! - **Schemas**: domain type wrappers and `Outcome` envelopes from
//!   [`crate::inbound::http::schemas`]
//!
//! The generated document is served by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::schemas::{
    CategoryListOutcome, CategoryOutcome, CategorySchema, EmptyOutcome, ErrorCodeSchema,
    EventDtoSchema, EventListOutcome, EventOutcome, ExistsOutcome, PriceTierDtoSchema,
    TagListOutcome, TagNameOutcome, TagOutcome, TagSchema,
};
use crate::inbound::http::tags::TagNameRequest;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Eventshop catalogue API",
        description = "Browse categories and events, search events, and manage event tags. \
                       Every response body is an envelope with isSuccess, message, errorCode, \
                       errors, and data fields."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::categories::list_categories,
        crate::inbound::http::categories::get_category,
        crate::inbound::http::categories::list_category_events,
        crate::inbound::http::events::search_events,
        crate::inbound::http::events::get_event,
        crate::inbound::http::events::event_exists,
        crate::inbound::http::tags::list_tags,
        crate::inbound::http::tags::create_tag,
        crate::inbound::http::tags::get_tag_name,
        crate::inbound::http::tags::create_and_attach_tag,
        crate::inbound::http::tags::attach_tag,
        crate::inbound::http::tags::detach_tag,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorCodeSchema,
        CategorySchema,
        TagSchema,
        PriceTierDtoSchema,
        EventDtoSchema,
        TagNameRequest,
        EmptyOutcome,
        CategoryOutcome,
        CategoryListOutcome,
        EventOutcome,
        EventListOutcome,
        ExistsOutcome,
        TagOutcome,
        TagListOutcome,
        TagNameOutcome,
    )),
    tags(
        (name = "categories", description = "Event categories and their events"),
        (name = "events", description = "Event lookup and search"),
        (name = "tags", description = "Tags and event tagging"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const EVENT_SCHEMA_NAME: &str = "crate.domain.EventDto";

    fn object_fields(schema: &RefOr<Schema>) -> Vec<String> {
        match schema {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    #[rstest]
    #[case("/api/v1/categories")]
    #[case("/api/v1/categories/{id}/events")]
    #[case("/api/v1/events")]
    #[case("/api/v1/events/{id}/exists")]
    #[case("/api/v1/events/{id}/tags/{tag_id}")]
    #[case("/api/v1/tags/{id}/name")]
    #[case("/health/ready")]
    fn document_lists_endpoint(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn event_schema_has_projection_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let fields = object_fields(schemas.get(EVENT_SCHEMA_NAME).expect("EventDto schema"));
        for field in ["eventId", "cityName", "tags", "priceTiers", "metadata"] {
            assert!(fields.iter().any(|f| f == field), "missing field {field}");
        }
    }

    #[rstest]
    fn document_serialises_to_json() {
        let json = ApiDoc::openapi().to_json().expect("OpenAPI serialises");
        assert!(json.contains("searchEvents"));
    }
}
