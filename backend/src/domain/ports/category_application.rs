//! Driving port for category browsing.
//!
//! Inbound adapters call this port to read categories and the events filed
//! under them. Every call resolves to an [`Outcome`] envelope, failures
//! included, so adapters never see repository errors.

use async_trait::async_trait;

use crate::domain::{Category, CategoryId, EventDto, Outcome};

/// Domain use-case port for categories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryApplication: Send + Sync {
    /// Fetch one category; `not_found` failure when absent.
    async fn get_category_by_id(&self, id: CategoryId) -> Outcome<Category>;

    /// List every category ordered by name.
    async fn get_all_categories(&self) -> Outcome<Vec<Category>>;

    /// List the events of an existing category ordered by start time.
    async fn get_events_by_category(&self, category_id: CategoryId) -> Outcome<Vec<EventDto>>;
}
