//! Event lookup and search service.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error};

use crate::domain::ports::{EventRepository, EventRepositoryError, EventService};
use crate::domain::{Error, EventDto, EventId, EventSearchCriteria, EventSearchError, Outcome};

fn map_repository_error(err: EventRepositoryError) -> Error {
    match err {
        EventRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("event repository unavailable: {message}"))
        }
        EventRepositoryError::Query { message } => {
            error!(%message, "event repository query failed");
            Error::internal(format!("event repository error: {message}"))
        }
    }
}

fn invalid_criteria(err: &EventSearchError) -> Error {
    Error::invalid_request("invalid search criteria").with_details(json!({
        "code": "invalid_search_criteria",
        "errors": err.problems(),
    }))
}

/// Event service implementing the event driving port.
#[derive(Clone)]
pub struct EventCatalogService<E> {
    event_repo: Arc<E>,
}

impl<E> EventCatalogService<E> {
    /// Create a new service with the event repository.
    pub fn new(event_repo: Arc<E>) -> Self {
        Self { event_repo }
    }
}

impl<E> EventCatalogService<E>
where
    E: EventRepository,
{
    async fn find(&self, id: EventId) -> Result<EventDto, Error> {
        self.event_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("event {id} not found")))
    }

    async fn search(&self, criteria: EventSearchCriteria) -> Result<Vec<EventDto>, Error> {
        let filter = criteria.validate().map_err(|err| invalid_criteria(&err))?;
        let events = self
            .event_repo
            .search(&filter)
            .await
            .map_err(map_repository_error)?;
        debug!(matched = events.len(), limit = filter.limit(), "event search completed");
        Ok(events)
    }
}

#[async_trait]
impl<E> EventService for EventCatalogService<E>
where
    E: EventRepository,
{
    async fn get_event_by_id(&self, id: EventId) -> Outcome<EventDto> {
        self.find(id).await.into()
    }

    async fn search_events(&self, criteria: EventSearchCriteria) -> Outcome<Vec<EventDto>> {
        self.search(criteria).await.into()
    }

    async fn event_exists(&self, id: EventId) -> Result<bool, Error> {
        self.event_repo
            .exists(id)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "event_catalog_service_tests.rs"]
mod tests;
