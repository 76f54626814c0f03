//! Read-side port for events and their projections.
//!
//! Adapters return fully resolved [`EventDto`] projections: city, venue and
//! category names, tag names, and price tiers are assembled in one call so
//! consumers see a consistent view of each event.

use async_trait::async_trait;

use crate::domain::{CategoryId, EventDto, EventFilter, EventId};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading events.
    pub enum EventRepositoryError for "event repository" {}
}

/// Port for loading event projections from storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Fetch one event projection, `None` when it does not exist.
    async fn find_by_id(&self, id: EventId) -> Result<Option<EventDto>, EventRepositoryError>;

    /// List the events of a category ordered by start time, then id.
    ///
    /// Returns an empty list when the category has no events or does not
    /// exist; callers check category existence separately.
    async fn list_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<EventDto>, EventRepositoryError>;

    /// Return at most `filter.limit()` events matching every filter,
    /// ordered by start time, then id.
    async fn search(&self, filter: &EventFilter) -> Result<Vec<EventDto>, EventRepositoryError>;

    /// Whether an event with the identifier exists.
    async fn exists(&self, id: EventId) -> Result<bool, EventRepositoryError>;
}

/// Fixture implementation backed by an empty catalogue.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEventRepository;

#[async_trait]
impl EventRepository for FixtureEventRepository {
    async fn find_by_id(&self, _id: EventId) -> Result<Option<EventDto>, EventRepositoryError> {
        Ok(None)
    }

    async fn list_by_category(
        &self,
        _category_id: CategoryId,
    ) -> Result<Vec<EventDto>, EventRepositoryError> {
        Ok(Vec::new())
    }

    async fn search(&self, _filter: &EventFilter) -> Result<Vec<EventDto>, EventRepositoryError> {
        Ok(Vec::new())
    }

    async fn exists(&self, _id: EventId) -> Result<bool, EventRepositoryError> {
        Ok(false)
    }
}
