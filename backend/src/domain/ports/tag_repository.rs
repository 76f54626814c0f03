//! Port for reading and writing tags and their event attachments.
//!
//! Write operations are atomic: `create_and_attach` runs inside one
//! transaction, so a missing event leaves no orphan tag behind.

use async_trait::async_trait;

use crate::domain::{EventId, Tag, TagId, TagName};

use super::define_port_error;

define_port_error! {
    /// Errors raised by tag persistence.
    pub enum TagRepositoryError for "tag repository" {
        /// A tag with the same case-insensitive name already exists.
        DuplicateName { name: String } => "tag named {name:?} already exists",
        /// The referenced event does not exist.
        EventNotFound { event_id: EventId } => "event {event_id} not found",
        /// The referenced tag does not exist.
        TagNotFound { tag_id: TagId } => "tag {tag_id} not found",
    }
}

/// Result of attaching a tag to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachOutcome {
    /// A new association was recorded.
    Attached,
    /// The tag was already attached; nothing changed.
    AlreadyAttached,
}

/// Port for tag storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// List every tag ordered by name.
    async fn list_all(&self) -> Result<Vec<Tag>, TagRepositoryError>;

    /// Fetch one tag, `None` when it does not exist.
    async fn find_by_id(&self, id: TagId) -> Result<Option<Tag>, TagRepositoryError>;

    /// Insert a new tag.
    ///
    /// Fails with [`TagRepositoryError::DuplicateName`] when the name is
    /// taken.
    async fn create(&self, name: &TagName) -> Result<Tag, TagRepositoryError>;

    /// Attach the named tag to an event, creating the tag when no tag of
    /// that name exists yet.
    ///
    /// Fails with [`TagRepositoryError::EventNotFound`] without creating the
    /// tag when the event is missing.
    async fn create_and_attach(
        &self,
        name: &TagName,
        event_id: EventId,
    ) -> Result<Tag, TagRepositoryError>;

    /// Attach an existing tag to an event.
    async fn attach(
        &self,
        tag_id: TagId,
        event_id: EventId,
    ) -> Result<AttachOutcome, TagRepositoryError>;

    /// Remove a tag from an event, returning `false` when it was not
    /// attached.
    async fn detach(&self, tag_id: TagId, event_id: EventId) -> Result<bool, TagRepositoryError>;
}

/// Fixture implementation with no tags and no events.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTagRepository;

#[async_trait]
impl TagRepository for FixtureTagRepository {
    async fn list_all(&self) -> Result<Vec<Tag>, TagRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: TagId) -> Result<Option<Tag>, TagRepositoryError> {
        Ok(None)
    }

    async fn create(&self, _name: &TagName) -> Result<Tag, TagRepositoryError> {
        Err(TagRepositoryError::connection(
            "fixture tag repository does not persist tags",
        ))
    }

    async fn create_and_attach(
        &self,
        _name: &TagName,
        event_id: EventId,
    ) -> Result<Tag, TagRepositoryError> {
        Err(TagRepositoryError::event_not_found(event_id))
    }

    async fn attach(
        &self,
        tag_id: TagId,
        _event_id: EventId,
    ) -> Result<AttachOutcome, TagRepositoryError> {
        Err(TagRepositoryError::tag_not_found(tag_id))
    }

    async fn detach(&self, _tag_id: TagId, _event_id: EventId) -> Result<bool, TagRepositoryError> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_rejects_writes_it_cannot_satisfy() {
        let repo = FixtureTagRepository;
        let name = TagName::new("outdoor").expect("valid name");
        let event_id = EventId::new(1).expect("valid id");

        let err = repo
            .create_and_attach(&name, event_id)
            .await
            .expect_err("no events in fixture");
        assert_eq!(err, TagRepositoryError::event_not_found(event_id));
        assert!(matches!(
            repo.create(&name).await,
            Err(TagRepositoryError::Connection { .. })
        ));
    }
}
