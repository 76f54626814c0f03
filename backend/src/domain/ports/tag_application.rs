//! Driving port for tag management.

use async_trait::async_trait;

use crate::domain::{EventId, Outcome, Tag, TagId};

/// Domain use-case port for tags and their event attachments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagApplication: Send + Sync {
    /// List every tag ordered by name.
    async fn get_all_tags(&self) -> Outcome<Vec<Tag>>;

    /// Create a tag from a raw name.
    ///
    /// The name is trimmed and validated; a case-insensitive duplicate
    /// yields a `conflict` failure.
    async fn create_tag(&self, name: String) -> Outcome<Tag>;

    /// Create (or reuse) the named tag and attach it to the event.
    async fn create_and_attach_to_event(&self, name: String, event_id: EventId) -> Outcome<Tag>;

    /// Attach an existing tag to an event. Idempotent.
    async fn attach_to_event(&self, tag_id: TagId, event_id: EventId) -> Outcome<()>;

    /// Remove a tag from an event; `not_found` when it was not attached.
    async fn detach_from_event(&self, tag_id: TagId, event_id: EventId) -> Outcome<()>;

    /// Resolve a tag's display name.
    async fn get_tag_name_by_id(&self, tag_id: TagId) -> Outcome<String>;
}
