//! Tag management handlers.
//!
//! ```text
//! GET    /api/v1/tags
//! POST   /api/v1/tags                      {"name":"Outdoor"}
//! GET    /api/v1/tags/{id}/name
//! POST   /api/v1/events/{id}/tags          {"name":"Outdoor"}
//! PUT    /api/v1/events/{id}/tags/{tag_id}
//! DELETE /api/v1/events/{id}/tags/{tag_id}
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{EventId, TagId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{respond, respond_ok};
use crate::inbound::http::schemas::{EmptyOutcome, TagListOutcome, TagNameOutcome, TagOutcome};
use crate::inbound::http::state::HttpState;

/// Request body naming a tag.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct TagNameRequest {
    /// Display name; trimmed, 1 to 64 characters, unique ignoring case.
    #[schema(example = "Outdoor")]
    pub name: String,
}

/// List every tag ordered by name.
#[utoipa::path(
    get,
    path = "/api/v1/tags",
    responses(
        (status = 200, description = "Tags", body = TagListOutcome),
        (status = 503, description = "Service unavailable", body = EmptyOutcome)
    ),
    tags = ["tags"],
    operation_id = "getAllTags"
)]
#[get("/tags")]
pub async fn list_tags(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    respond_ok(state.tags.get_all_tags().await)
}

/// Create a tag.
#[utoipa::path(
    post,
    path = "/api/v1/tags",
    request_body = TagNameRequest,
    responses(
        (status = 201, description = "Tag created", body = TagOutcome),
        (status = 400, description = "Invalid tag name", body = EmptyOutcome),
        (status = 409, description = "A tag with this name exists", body = EmptyOutcome),
        (status = 503, description = "Service unavailable", body = EmptyOutcome)
    ),
    tags = ["tags"],
    operation_id = "createTag"
)]
#[post("/tags")]
pub async fn create_tag(
    state: web::Data<HttpState>,
    payload: web::Json<TagNameRequest>,
) -> ApiResult<HttpResponse> {
    let TagNameRequest { name } = payload.into_inner();
    respond(state.tags.create_tag(name).await, StatusCode::CREATED)
}

/// Resolve a tag's name.
#[utoipa::path(
    get,
    path = "/api/v1/tags/{id}/name",
    params(("id" = i32, Path, description = "Tag identifier")),
    responses(
        (status = 200, description = "Tag name", body = TagNameOutcome),
        (status = 400, description = "Malformed identifier", body = EmptyOutcome),
        (status = 404, description = "Unknown tag", body = EmptyOutcome)
    ),
    tags = ["tags"],
    operation_id = "getTagNameById"
)]
#[get("/tags/{id}/name")]
pub async fn get_tag_name(
    state: web::Data<HttpState>,
    path: web::Path<TagId>,
) -> ApiResult<HttpResponse> {
    respond_ok(state.tags.get_tag_name_by_id(path.into_inner()).await)
}

/// Create (or reuse) a tag by name and attach it to an event.
#[utoipa::path(
    post,
    path = "/api/v1/events/{id}/tags",
    params(("id" = i32, Path, description = "Event identifier")),
    request_body = TagNameRequest,
    responses(
        (status = 200, description = "Tag attached", body = TagOutcome),
        (status = 400, description = "Invalid tag name", body = EmptyOutcome),
        (status = 404, description = "Unknown event", body = EmptyOutcome),
        (status = 503, description = "Service unavailable", body = EmptyOutcome)
    ),
    tags = ["tags"],
    operation_id = "createAndAttachTag"
)]
#[post("/events/{id}/tags")]
pub async fn create_and_attach_tag(
    state: web::Data<HttpState>,
    path: web::Path<EventId>,
    payload: web::Json<TagNameRequest>,
) -> ApiResult<HttpResponse> {
    let TagNameRequest { name } = payload.into_inner();
    respond_ok(
        state
            .tags
            .create_and_attach_to_event(name, path.into_inner())
            .await,
    )
}

/// Attach an existing tag to an event. Repeating the call succeeds.
#[utoipa::path(
    put,
    path = "/api/v1/events/{id}/tags/{tag_id}",
    params(
        ("id" = i32, Path, description = "Event identifier"),
        ("tag_id" = i32, Path, description = "Tag identifier")
    ),
    responses(
        (status = 200, description = "Tag attached", body = EmptyOutcome),
        (status = 400, description = "Malformed identifier", body = EmptyOutcome),
        (status = 404, description = "Unknown tag or event", body = EmptyOutcome)
    ),
    tags = ["tags"],
    operation_id = "attachTag"
)]
#[put("/events/{id}/tags/{tag_id}")]
pub async fn attach_tag(
    state: web::Data<HttpState>,
    path: web::Path<(EventId, TagId)>,
) -> ApiResult<HttpResponse> {
    let (event_id, tag_id) = path.into_inner();
    respond_ok(state.tags.attach_to_event(tag_id, event_id).await)
}

/// Detach a tag from an event.
#[utoipa::path(
    delete,
    path = "/api/v1/events/{id}/tags/{tag_id}",
    params(
        ("id" = i32, Path, description = "Event identifier"),
        ("tag_id" = i32, Path, description = "Tag identifier")
    ),
    responses(
        (status = 200, description = "Tag detached", body = EmptyOutcome),
        (status = 400, description = "Malformed identifier", body = EmptyOutcome),
        (status = 404, description = "Tag was not attached", body = EmptyOutcome)
    ),
    tags = ["tags"],
    operation_id = "detachTag"
)]
#[delete("/events/{id}/tags/{tag_id}")]
pub async fn detach_tag(
    state: web::Data<HttpState>,
    path: web::Path<(EventId, TagId)>,
) -> ApiResult<HttpResponse> {
    let (event_id, tag_id) = path.into_inner();
    respond_ok(state.tags.detach_from_event(tag_id, event_id).await)
}
