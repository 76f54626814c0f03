//! Driving port for event lookup and search.

use async_trait::async_trait;

use crate::domain::{Error, EventDto, EventId, EventSearchCriteria, Outcome};

/// Domain use-case port for events.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventService: Send + Sync {
    /// Fetch one event projection; `not_found` failure when absent.
    async fn get_event_by_id(&self, id: EventId) -> Outcome<EventDto>;

    /// Search events by category, tags, city, and start date window.
    ///
    /// Invalid criteria yield an `invalid_request` failure listing each
    /// problem without touching storage.
    async fn search_events(&self, criteria: EventSearchCriteria) -> Outcome<Vec<EventDto>>;

    /// Whether the event exists.
    ///
    /// Storage failures surface as errors rather than `false`.
    async fn event_exists(&self, id: EventId) -> Result<bool, Error>;
}
