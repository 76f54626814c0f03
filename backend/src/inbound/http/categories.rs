//! Category HTTP handlers.
//!
//! ```text
//! GET /api/v1/categories
//! GET /api/v1/categories/{id}
//! GET /api/v1/categories/{id}/events
//! ```

use actix_web::{HttpResponse, get, web};

use crate::domain::CategoryId;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::respond_ok;
use crate::inbound::http::schemas::{
    CategoryListOutcome, CategoryOutcome, EmptyOutcome, EventListOutcome,
};
use crate::inbound::http::state::HttpState;

/// List every category ordered by name.
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    description = "Return all categories ordered by name, then id.",
    responses(
        (status = 200, description = "Categories", body = CategoryListOutcome),
        (status = 503, description = "Service unavailable", body = EmptyOutcome),
        (status = 500, description = "Internal server error", body = EmptyOutcome)
    ),
    tags = ["categories"],
    operation_id = "getAllCategories"
)]
#[get("/categories")]
pub async fn list_categories(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    respond_ok(state.categories.get_all_categories().await)
}

/// Fetch one category.
#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}",
    params(("id" = i32, Path, description = "Category identifier")),
    responses(
        (status = 200, description = "Category", body = CategoryOutcome),
        (status = 400, description = "Malformed identifier", body = EmptyOutcome),
        (status = 404, description = "Unknown category", body = EmptyOutcome),
        (status = 503, description = "Service unavailable", body = EmptyOutcome)
    ),
    tags = ["categories"],
    operation_id = "getCategoryById"
)]
#[get("/categories/{id}")]
pub async fn get_category(
    state: web::Data<HttpState>,
    path: web::Path<CategoryId>,
) -> ApiResult<HttpResponse> {
    respond_ok(state.categories.get_category_by_id(path.into_inner()).await)
}

/// List the events of a category ordered by start time.
#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}/events",
    params(("id" = i32, Path, description = "Category identifier")),
    responses(
        (status = 200, description = "Events of the category", body = EventListOutcome),
        (status = 400, description = "Malformed identifier", body = EmptyOutcome),
        (status = 404, description = "Unknown category", body = EmptyOutcome),
        (status = 503, description = "Service unavailable", body = EmptyOutcome)
    ),
    tags = ["categories"],
    operation_id = "getEventsByCategory"
)]
#[get("/categories/{id}/events")]
pub async fn list_category_events(
    state: web::Data<HttpState>,
    path: web::Path<CategoryId>,
) -> ApiResult<HttpResponse> {
    respond_ok(
        state
            .categories
            .get_events_by_category(path.into_inner())
            .await,
    )
}

#[cfg(test)]
mod tests {
    //! Handler coverage against mocked application ports.
    use super::*;
    use crate::domain::{Category, CategoryDraft, ErrorCode, Outcome};
    use crate::inbound::http::test_utils::{StatePorts, call_get, init_app};
    use actix_web::http::StatusCode;
    use mockall::predicate::eq;
    use rstest::rstest;
    use serde_json::json;

    fn concerts() -> Category {
        Category::new(CategoryDraft {
            id: CategoryId::new(1).expect("valid id"),
            name: "Concerts".to_owned(),
            slug: Some("concerts".to_owned()),
        })
        .expect("valid category")
    }

    #[rstest]
    #[actix_web::test]
    async fn lists_categories_in_envelope() {
        let mut ports = StatePorts::default();
        ports
            .categories
            .expect_get_all_categories()
            .times(1)
            .return_once(|| Outcome::success(vec![concerts()]));
        let app = init_app(ports, |cfg| {
            cfg.service(list_categories);
        })
        .await;

        let (status, body) = call_get(&app, "/api/v1/categories").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["data"],
            json!([{"id": 1, "name": "Concerts", "slug": "concerts"}])
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn unknown_category_is_404() {
        let mut ports = StatePorts::default();
        ports
            .categories
            .expect_get_category_by_id()
            .with(eq(CategoryId::new(9).expect("valid id")))
            .return_once(|_| {
                Outcome::failure("category 9 not found", Some(ErrorCode::NotFound), Vec::new())
            });
        let app = init_app(ports, |cfg| {
            cfg.service(get_category);
        })
        .await;

        let (status, body) = call_get(&app, "/api/v1/categories/9").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["isSuccess"], json!(false));
        assert_eq!(body["errorCode"], json!("not_found"));
        assert_eq!(body["message"], json!("category 9 not found"));
    }

    #[rstest]
    #[case("/api/v1/categories/abc")]
    #[case("/api/v1/categories/0")]
    #[case("/api/v1/categories/-3/events")]
    #[actix_web::test]
    async fn malformed_identifiers_are_rejected(#[case] uri: &str) {
        let app = init_app(StatePorts::default(), |cfg| {
            cfg.service(get_category).service(list_category_events);
        })
        .await;

        let (status, body) = call_get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errorCode"], json!("invalid_request"));
        assert_eq!(body["errors"].as_array().map(Vec::len), Some(1));
    }

    #[rstest]
    #[actix_web::test]
    async fn empty_category_lists_no_events() {
        let mut ports = StatePorts::default();
        ports
            .categories
            .expect_get_events_by_category()
            .return_once(|_| Outcome::success(Vec::new()));
        let app = init_app(ports, |cfg| {
            cfg.service(list_category_events);
        })
        .await;

        let (status, body) = call_get(&app, "/api/v1/categories/1/events").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!([]));
    }
}
