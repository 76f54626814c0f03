//! Category browsing service.
//!
//! Implements [`CategoryApplication`] over the category and event
//! repositories, folding repository failures into [`Outcome`] envelopes.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{
    CategoryApplication, CategoryRepository, CategoryRepositoryError, EventRepository,
    EventRepositoryError,
};
use crate::domain::{Category, CategoryId, Error, EventDto, Outcome};

fn map_category_error(err: CategoryRepositoryError) -> Error {
    match err {
        CategoryRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("category repository unavailable: {message}"))
        }
        CategoryRepositoryError::Query { message } => {
            error!(%message, "category repository query failed");
            Error::internal(format!("category repository error: {message}"))
        }
    }
}

fn map_event_error(err: EventRepositoryError) -> Error {
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

/// Category service implementing the category driving port.
#[derive(Clone)]
pub struct CategoryService<C, E> {
    category_repo: Arc<C>,
    event_repo: Arc<E>,
}

impl<C, E> CategoryService<C, E> {
    /// Create a new service with the given repositories.
    pub fn new(category_repo: Arc<C>, event_repo: Arc<E>) -> Self {
        Self {
            category_repo,
            event_repo,
        }
    }
}

impl<C, E> CategoryService<C, E>
where
    C: CategoryRepository,
    E: EventRepository,
{
    async fn require_category(&self, id: CategoryId) -> Result<Category, Error> {
        self.category_repo
            .find_by_id(id)
            .await
            .map_err(map_category_error)?
            .ok_or_else(|| Error::not_found(format!("category {id} not found")))
    }

    async fn events_of(&self, category_id: CategoryId) -> Result<Vec<EventDto>, Error> {
        self.require_category(category_id).await?;
        self.event_repo
            .list_by_category(category_id)
            .await
            .map_err(map_event_error)
    }
}

#[async_trait]
impl<C, E> CategoryApplication for CategoryService<C, E>
where
    C: CategoryRepository,
    E: EventRepository,
{
    async fn get_category_by_id(&self, id: CategoryId) -> Outcome<Category> {
        self.require_category(id).await.into()
    }

    async fn get_all_categories(&self) -> Outcome<Vec<Category>> {
        self.category_repo
            .list_all()
            .await
            .map_err(map_category_error)
            .into()
    }

    async fn get_events_by_category(&self, category_id: CategoryId) -> Outcome<Vec<EventDto>> {
        self.events_of(category_id).await.into()
    }
}

#[cfg(test)]
#[path = "category_service_tests.rs"]
mod tests;
