//! Builders wiring repositories into application services for HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use eventshop::domain::ports::{
    CategoryRepository, EventRepository, FixtureCategoryRepository, FixtureEventRepository,
    FixtureTagRepository, TagRepository,
};
use eventshop::domain::{CategoryService, EventCatalogService, TagService};
use eventshop::inbound::http::state::HttpState;
use eventshop::outbound::persistence::{
    DieselCategoryRepository, DieselEventRepository, DieselTagRepository,
};

use super::CatalogStore;

/// Wrap repositories in the application services behind the HTTP ports.
///
/// The event repository is shared between category and event services.
fn state_from_repositories<C, E, T>(
    categories: Arc<C>,
    events: Arc<E>,
    tags: Arc<T>,
) -> HttpState
where
    C: CategoryRepository + 'static,
    E: EventRepository + 'static,
    T: TagRepository + 'static,
{
    HttpState::new(
        Arc::new(CategoryService::new(categories, Arc::clone(&events))),
        Arc::new(EventCatalogService::new(events)),
        Arc::new(TagService::new(tags)),
    )
}

/// Build HTTP state over the configured catalogue store.
pub(crate) fn build_http_state(store: &CatalogStore) -> web::Data<HttpState> {
    let state = match store {
        CatalogStore::Database(pool) => state_from_repositories(
            Arc::new(DieselCategoryRepository::new(pool.clone())),
            Arc::new(DieselEventRepository::new(pool.clone())),
            Arc::new(DieselTagRepository::new(pool.clone())),
        ),
        CatalogStore::Fixtures => {
            warn!("no database configured; serving an empty fixture catalogue");
            state_from_repositories(
                Arc::new(FixtureCategoryRepository),
                Arc::new(FixtureEventRepository),
                Arc::new(FixtureTagRepository),
            )
        }
    };
    web::Data::new(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_state_serves_empty_catalogue() {
        let state = build_http_state(&CatalogStore::Fixtures);

        let categories = state.categories.get_all_categories().await;
        assert!(categories.is_success());
        assert_eq!(categories.data().map(Vec::len), Some(0));

        let tags = state.tags.get_all_tags().await;
        assert_eq!(tags.data().map(Vec::len), Some(0));
    }
}
