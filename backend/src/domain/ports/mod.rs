//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Repository ports face storage and report typed errors; application
//! ports face inbound adapters and resolve to [`crate::domain::Outcome`].

mod macros;
pub(crate) use macros::define_port_error;

mod category_application;
mod category_repository;
mod event_repository;
mod event_service;
mod tag_application;
mod tag_repository;

#[cfg(test)]
pub use category_application::MockCategoryApplication;
pub use category_application::CategoryApplication;
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
pub use category_repository::{
    CategoryRepository, CategoryRepositoryError, FixtureCategoryRepository,
};
#[cfg(test)]
pub use event_repository::MockEventRepository;
pub use event_repository::{EventRepository, EventRepositoryError, FixtureEventRepository};
#[cfg(test)]
pub use event_service::MockEventService;
pub use event_service::EventService;
#[cfg(test)]
pub use tag_application::MockTagApplication;
pub use tag_application::TagApplication;
#[cfg(test)]
pub use tag_repository::MockTagRepository;
pub use tag_repository::{AttachOutcome, FixtureTagRepository, TagRepository, TagRepositoryError};
