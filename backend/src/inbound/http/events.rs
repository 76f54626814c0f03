//! Event lookup and search handlers.
//!
//! ```text
//! GET /api/v1/events?categoryId=1&tagIds=2,3&city=Toronto&from=2026-05-01&to=2026-05-31&limit=20
//! GET /api/v1/events/{id}
//! GET /api/v1/events/{id}/exists
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{Error, EventId, EventSearchCriteria, Outcome};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::respond_ok;
use crate::inbound::http::schemas::{EmptyOutcome, EventListOutcome, EventOutcome, ExistsOutcome};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, FieldProblems, ValidationCode, parse_id_list, parse_optional, parse_optional_date,
};

const CATEGORY_ID: FieldName = FieldName::new("categoryId");
const TAG_IDS: FieldName = FieldName::new("tagIds");
const FROM: FieldName = FieldName::new("from");
const TO: FieldName = FieldName::new("to");
const LIMIT: FieldName = FieldName::new("limit");

/// Raw search query; values are parsed by hand so every problem is reported.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchEventsQuery {
    /// Category identifier.
    category_id: Option<String>,
    /// Comma-separated tag identifiers; events must carry all of them.
    tag_ids: Option<String>,
    /// City name, matched case-insensitively.
    city: Option<String>,
    /// Earliest start date (`YYYY-MM-DD`, inclusive).
    from: Option<String>,
    /// Latest start date (`YYYY-MM-DD`, inclusive).
    to: Option<String>,
    /// Maximum number of results (1 to 200, default 50).
    limit: Option<String>,
}

impl SearchEventsQuery {
    fn into_criteria(self) -> Result<EventSearchCriteria, Error> {
        let mut problems = FieldProblems::new(ValidationCode::InvalidQuery);
        let category_id = problems.check(parse_optional(self.category_id.as_deref(), CATEGORY_ID));
        let tag_ids = problems.check(parse_id_list(self.tag_ids.as_deref(), TAG_IDS));
        let from = problems.check(parse_optional_date(self.from.as_deref(), FROM));
        let to = problems.check(parse_optional_date(self.to.as_deref(), TO));
        let limit = problems.check(parse_optional(self.limit.as_deref(), LIMIT));
        problems.finish()?;

        Ok(EventSearchCriteria {
            category_id: category_id.flatten(),
            tag_ids: tag_ids.unwrap_or_default(),
            city: self.city,
            from: from.flatten(),
            to: to.flatten(),
            limit: limit.flatten(),
        })
    }
}

/// Search events by category, tags, city, and start date window.
#[utoipa::path(
    get,
    path = "/api/v1/events",
    params(SearchEventsQuery),
    description = "Search events. Results are ordered by start time, then id.",
    responses(
        (status = 200, description = "Matching events", body = EventListOutcome),
        (status = 400, description = "Invalid search parameters", body = EmptyOutcome),
        (status = 503, description = "Service unavailable", body = EmptyOutcome)
    ),
    tags = ["events"],
    operation_id = "searchEvents"
)]
#[get("/events")]
pub async fn search_events(
    state: web::Data<HttpState>,
    query: web::Query<SearchEventsQuery>,
) -> ApiResult<HttpResponse> {
    let criteria = query.into_inner().into_criteria()?;
    respond_ok(state.events.search_events(criteria).await)
}

/// Fetch one event projection.
#[utoipa::path(
    get,
    path = "/api/v1/events/{id}",
    params(("id" = i32, Path, description = "Event identifier")),
    responses(
        (status = 200, description = "Event", body = EventOutcome),
        (status = 400, description = "Malformed identifier", body = EmptyOutcome),
        (status = 404, description = "Unknown event", body = EmptyOutcome),
        (status = 503, description = "Service unavailable", body = EmptyOutcome)
    ),
    tags = ["events"],
    operation_id = "getEventById"
)]
#[get("/events/{id}")]
pub async fn get_event(
    state: web::Data<HttpState>,
    path: web::Path<EventId>,
) -> ApiResult<HttpResponse> {
    respond_ok(state.events.get_event_by_id(path.into_inner()).await)
}

/// Report whether an event exists.
#[utoipa::path(
    get,
    path = "/api/v1/events/{id}/exists",
    params(("id" = i32, Path, description = "Event identifier")),
    responses(
        (status = 200, description = "Existence flag", body = ExistsOutcome),
        (status = 400, description = "Malformed identifier", body = EmptyOutcome),
        (status = 503, description = "Service unavailable", body = EmptyOutcome)
    ),
    tags = ["events"],
    operation_id = "eventExists"
)]
#[get("/events/{id}/exists")]
pub async fn event_exists(
    state: web::Data<HttpState>,
    path: web::Path<EventId>,
) -> ApiResult<HttpResponse> {
    let exists = state.events.event_exists(path.into_inner()).await;
    respond_ok(Outcome::from(exists))
}
