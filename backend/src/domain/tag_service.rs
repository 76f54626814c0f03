//! Tag management service.
//!
//! Validates raw tag names, delegates persistence to the [`TagRepository`]
//! port, and reports every result as an [`Outcome`].

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{error, info};

use crate::domain::ports::{AttachOutcome, TagApplication, TagRepository, TagRepositoryError};
use crate::domain::{
    CatalogValidationError, Error, EventId, Outcome, Tag, TagId, TagName,
};

/// Message returned when attaching a tag that is already attached.
pub const ALREADY_ATTACHED_MESSAGE: &str = "tag already attached";

fn map_repository_error(err: TagRepositoryError) -> Error {
    match err {
        TagRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("tag repository unavailable: {message}"))
        }
        TagRepositoryError::Query { message } => {
            error!(%message, "tag repository query failed");
            Error::internal(format!("tag repository error: {message}"))
        }
        TagRepositoryError::DuplicateName { name } => {
            Error::conflict(format!("a tag named {name:?} already exists"))
        }
        TagRepositoryError::EventNotFound { event_id } => {
            Error::not_found(format!("event {event_id} not found"))
        }
        TagRepositoryError::TagNotFound { tag_id } => {
            Error::not_found(format!("tag {tag_id} not found"))
        }
    }
}

fn parse_name(raw: String) -> Result<TagName, Error> {
    TagName::new(raw).map_err(|err: CatalogValidationError| {
        Error::invalid_request("invalid tag name").with_details(json!({
            "field": "name",
            "errors": [err.to_string()],
        }))
    })
}

/// Tag service implementing the tag driving port.
#[derive(Clone)]
pub struct TagService<T> {
    tag_repo: Arc<T>,
}

impl<T> TagService<T> {
    /// Create a new service with the tag repository.
    pub fn new(tag_repo: Arc<T>) -> Self {
        Self { tag_repo }
    }
}

impl<T> TagService<T>
where
    T: TagRepository,
{
    async fn create(&self, raw: String) -> Result<Tag, Error> {
        let name = parse_name(raw)?;
        let tag = self
            .tag_repo
            .create(&name)
            .await
            .map_err(map_repository_error)?;
        info!(tag_id = %tag.id(), name = %tag.name(), "tag created");
        Ok(tag)
    }

    async fn create_and_attach(&self, raw: String, event_id: EventId) -> Result<Tag, Error> {
        let name = parse_name(raw)?;
        self.tag_repo
            .create_and_attach(&name, event_id)
            .await
            .map_err(map_repository_error)
    }

    async fn attach(&self, tag_id: TagId, event_id: EventId) -> Result<AttachOutcome, Error> {
        self.tag_repo
            .attach(tag_id, event_id)
            .await
            .map_err(map_repository_error)
    }

    async fn detach(&self, tag_id: TagId, event_id: EventId) -> Result<(), Error> {
        let removed = self
            .tag_repo
            .detach(tag_id, event_id)
            .await
            .map_err(map_repository_error)?;
        if removed {
            Ok(())
        } else {
            Err(Error::not_found(format!(
                "tag {tag_id} is not attached to event {event_id}"
            )))
        }
    }

    async fn name_of(&self, tag_id: TagId) -> Result<String, Error> {
        self.tag_repo
            .find_by_id(tag_id)
            .await
            .map_err(map_repository_error)?
            .map(|tag| tag.name().to_string())
            .ok_or_else(|| Error::not_found(format!("tag {tag_id} not found")))
    }
}

#[async_trait]
impl<T> TagApplication for TagService<T>
where
    T: TagRepository,
{
    async fn get_all_tags(&self) -> Outcome<Vec<Tag>> {
        self.tag_repo
            .list_all()
            .await
            .map_err(map_repository_error)
            .into()
    }

    async fn create_tag(&self, name: String) -> Outcome<Tag> {
        self.create(name).await.into()
    }

    async fn create_and_attach_to_event(&self, name: String, event_id: EventId) -> Outcome<Tag> {
        self.create_and_attach(name, event_id).await.into()
    }

    async fn attach_to_event(&self, tag_id: TagId, event_id: EventId) -> Outcome<()> {
        match self.attach(tag_id, event_id).await {
            Ok(AttachOutcome::Attached) => Outcome::success(()),
            Ok(AttachOutcome::AlreadyAttached) => {
                Outcome::success_with_message((), ALREADY_ATTACHED_MESSAGE)
            }
            Err(err) => Outcome::from_error(&err),
        }
    }

    async fn detach_from_event(&self, tag_id: TagId, event_id: EventId) -> Outcome<()> {
        self.detach(tag_id, event_id).await.into()
    }

    async fn get_tag_name_by_id(&self, tag_id: TagId) -> Outcome<String> {
        self.name_of(tag_id).await.into()
    }
}

#[cfg(test)]
#[path = "tag_service_tests.rs"]
mod tests;
