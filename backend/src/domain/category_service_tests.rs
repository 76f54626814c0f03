//! Tests for the category service.

use chrono::{TimeZone, Utc};
use rstest::rstest;

use super::*;
use crate::domain::ports::{MockCategoryRepository, MockEventRepository};
use crate::domain::{CategoryDraft, CityId, ErrorCode, EventId, VenueId};

fn category_id(value: i32) -> CategoryId {
    CategoryId::new(value).expect("valid category id")
}

fn category(id: i32, name: &str) -> Category {
    Category::new(CategoryDraft {
        id: category_id(id),
        name: name.to_owned(),
        slug: None,
    })
    .expect("valid category")
}

fn event(id: i32, category: i32) -> EventDto {
    EventDto {
        event_id: EventId::new(id).expect("valid event id"),
        title: format!("Event {id}"),
        start_time: Utc
            .with_ymd_and_hms(2026, 9, 1, 20, 0, 0)
            .single()
            .expect("valid timestamp"),
        end_time: None,
        city_id: CityId::new(1).expect("valid city id"),
        city_name: "Ottawa".to_owned(),
        venue_id: VenueId::new(1).expect("valid venue id"),
        venue_name: "TD Place".to_owned(),
        category_id: category_id(category),
        category_name: "Sports".to_owned(),
        tags: Vec::new(),
        price_tiers: Vec::new(),
        metadata: None,
    }
}

fn make_service(
    categories: MockCategoryRepository,
    events: MockEventRepository,
) -> CategoryService<MockCategoryRepository, MockEventRepository> {
    CategoryService::new(Arc::new(categories), Arc::new(events))
}

#[tokio::test]
async fn get_category_by_id_returns_category() {
    let mut categories = MockCategoryRepository::new();
    categories
        .expect_find_by_id()
        .withf(|id| id.get() == 4)
        .times(1)
        .return_once(|_| Ok(Some(category(4, "Theatre"))));

    let outcome = make_service(categories, MockEventRepository::new())
        .get_category_by_id(category_id(4))
        .await;

    assert!(outcome.is_success());
    assert_eq!(outcome.data().map(Category::name), Some("Theatre"));
}

#[tokio::test]
async fn get_category_by_id_reports_missing_category() {
    let mut categories = MockCategoryRepository::new();
    categories
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(None));

    let outcome = make_service(categories, MockEventRepository::new())
        .get_category_by_id(category_id(9))
        .await;

    assert!(!outcome.is_success());
    assert!(outcome.data().is_none());
    assert_eq!(outcome.error_code(), Some(ErrorCode::NotFound));
    assert_eq!(outcome.message(), Some("category 9 not found"));
}

#[tokio::test]
async fn get_all_categories_accepts_empty_catalogue() {
    let mut categories = MockCategoryRepository::new();
    categories
        .expect_list_all()
        .times(1)
        .return_once(|| Ok(Vec::new()));

    let outcome = make_service(categories, MockEventRepository::new())
        .get_all_categories()
        .await;

    assert!(outcome.is_success());
    assert_eq!(outcome.data().map(Vec::len), Some(0));
}

#[rstest]
#[case(CategoryRepositoryError::connection("pool timed out"), ErrorCode::ServiceUnavailable)]
#[case(CategoryRepositoryError::query("bad row"), ErrorCode::InternalError)]
#[tokio::test]
async fn get_all_categories_maps_repository_errors(
    #[case] err: CategoryRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut categories = MockCategoryRepository::new();
    categories
        .expect_list_all()
        .times(1)
        .return_once(move || Err(err));

    let outcome = make_service(categories, MockEventRepository::new())
        .get_all_categories()
        .await;

    assert_eq!(outcome.error_code(), Some(expected));
}

#[tokio::test]
async fn get_events_by_category_lists_events_of_existing_category() {
    let mut categories = MockCategoryRepository::new();
    categories
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(category(2, "Sports"))));
    let mut events = MockEventRepository::new();
    events
        .expect_list_by_category()
        .withf(|id| id.get() == 2)
        .times(1)
        .return_once(|_| Ok(vec![event(1, 2), event(2, 2)]));

    let outcome = make_service(categories, events)
        .get_events_by_category(category_id(2))
        .await;

    let ids: Vec<i32> = outcome
        .into_data()
        .expect("events listed")
        .iter()
        .map(|dto| dto.event_id.get())
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn get_events_by_category_rejects_unknown_category_without_listing() {
    let mut categories = MockCategoryRepository::new();
    categories
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(None));
    let mut events = MockEventRepository::new();
    events.expect_list_by_category().times(0);

    let outcome = make_service(categories, events)
        .get_events_by_category(category_id(7))
        .await;

    assert_eq!(outcome.error_code(), Some(ErrorCode::NotFound));
}
