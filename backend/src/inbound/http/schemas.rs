//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the JSON shape of their domain counterparts but
//! live in the inbound adapter layer where framework concerns belong.

#![expect(
    dead_code,
    reason = "Schema wrappers are only read by utoipa during OpenAPI generation"
)]

use chrono::{DateTime, Utc};
use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in failed envelopes.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request conflicts with existing state.
    #[schema(rename = "conflict")]
    Conflict,
    /// A backing service is unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Category`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Category)]
pub struct CategorySchema {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "Concerts")]
    name: String,
    #[schema(example = "concerts")]
    slug: Option<String>,
}

/// OpenAPI schema for [`crate::domain::Tag`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Tag)]
pub struct TagSchema {
    #[schema(example = 4)]
    id: i32,
    #[schema(example = "Outdoor")]
    name: String,
}

/// OpenAPI schema for [`crate::domain::PriceTierDto`].
#[derive(ToSchema)]
#[schema(as = crate::domain::PriceTierDto, rename_all = "camelCase")]
pub struct PriceTierDtoSchema {
    #[schema(example = 11)]
    price_tier_id: i32,
    #[schema(example = "General admission")]
    tier_name: String,
    #[schema(example = 7)]
    event_id: i32,
    /// Exact decimal amount encoded as a string.
    #[schema(example = "49.99")]
    price: String,
    /// ISO 4217 currency code.
    #[schema(example = "CAD")]
    currency: String,
}

/// OpenAPI schema for [`crate::domain::EventDto`].
///
/// Flattened event projection with resolved city, venue, category, and tag
/// names.
#[derive(ToSchema)]
#[schema(as = crate::domain::EventDto, rename_all = "camelCase")]
pub struct EventDtoSchema {
    #[schema(example = 7)]
    event_id: i32,
    #[schema(example = "Harbourfront Jazz Night")]
    title: String,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
    city_id: i32,
    #[schema(example = "Toronto")]
    city_name: String,
    venue_id: i32,
    #[schema(example = "Massey Hall")]
    venue_name: String,
    category_id: i32,
    #[schema(example = "Concerts")]
    category_name: String,
    /// Tag names sorted case-insensitively.
    tags: Vec<String>,
    /// Tiers ordered by price, then identifier.
    price_tiers: Vec<PriceTierDtoSchema>,
    /// Free-form JSON object.
    metadata: Option<serde_json::Value>,
}

macro_rules! outcome_schema {
    ($(#[$meta:meta])* $name:ident, $data:ty) => {
        $(#[$meta])*
        #[derive(ToSchema)]
        #[schema(rename_all = "camelCase")]
        pub struct $name {
            is_success: bool,
            #[schema(example = "OK")]
            message: Option<String>,
            error_code: Option<ErrorCodeSchema>,
            /// One message per validation problem.
            errors: Vec<String>,
            /// Present exactly when `isSuccess` is true.
            data: Option<$data>,
        }
    };
}

outcome_schema!(
    /// Envelope without payload, used for failures and attach/detach.
    EmptyOutcome,
    serde_json::Value
);
outcome_schema!(
    /// Envelope carrying one category.
    CategoryOutcome,
    CategorySchema
);
outcome_schema!(
    /// Envelope carrying a category list.
    CategoryListOutcome,
    Vec<CategorySchema>
);
outcome_schema!(
    /// Envelope carrying one event projection.
    EventOutcome,
    EventDtoSchema
);
outcome_schema!(
    /// Envelope carrying event projections.
    EventListOutcome,
    Vec<EventDtoSchema>
);
outcome_schema!(
    /// Envelope carrying an existence flag.
    ExistsOutcome,
    bool
);
outcome_schema!(
    /// Envelope carrying one tag.
    TagOutcome,
    TagSchema
);
outcome_schema!(
    /// Envelope carrying a tag list.
    TagListOutcome,
    Vec<TagSchema>
);
outcome_schema!(
    /// Envelope carrying a tag name.
    TagNameOutcome,
    String
);
