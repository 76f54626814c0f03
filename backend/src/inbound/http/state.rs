//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CategoryApplication, EventService, TagApplication};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub categories: Arc<dyn CategoryApplication>,
    pub events: Arc<dyn EventService>,
    pub tags: Arc<dyn TagApplication>,
}

impl HttpState {
    /// Construct state from the three application ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use eventshop::domain::ports::{
    ///     FixtureCategoryRepository, FixtureEventRepository, FixtureTagRepository,
    /// };
    /// use eventshop::domain::{CategoryService, EventCatalogService, TagService};
    /// use eventshop::inbound::http::state::HttpState;
    ///
    /// let events = Arc::new(FixtureEventRepository);
    /// let state = HttpState::new(
    ///     Arc::new(CategoryService::new(Arc::new(FixtureCategoryRepository), events.clone())),
    ///     Arc::new(EventCatalogService::new(events)),
    ///     Arc::new(TagService::new(Arc::new(FixtureTagRepository))),
    /// );
    /// let _tags = state.tags.clone();
    /// ```
    pub fn new(
        categories: Arc<dyn CategoryApplication>,
        events: Arc<dyn EventService>,
        tags: Arc<dyn TagApplication>,
    ) -> Self {
        Self {
            categories,
            events,
            tags,
        }
    }
}
