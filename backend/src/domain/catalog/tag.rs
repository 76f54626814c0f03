//! Tag entity and validated tag name.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::CatalogValidationError;
use super::ids::TagId;
use super::validation::validate_bounded_field;

/// Longest accepted tag name, in characters.
pub const MAX_TAG_NAME_CHARS: usize = 64;

/// Trimmed, non-empty tag label of at most [`MAX_TAG_NAME_CHARS`] characters.
///
/// Tag names are unique case-insensitively; [`TagName::normalized`] yields
/// the key used for that comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TagName(String);

impl TagName {
    /// Validate a tag name, trimming surrounding whitespace.
    ///
    /// # Examples
    /// ```
    /// use eventshop::domain::TagName;
    ///
    /// let name = TagName::new("  Outdoor ").expect("valid name");
    /// assert_eq!(name.as_str(), "Outdoor");
    /// assert_eq!(name.normalized(), "outdoor");
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, CatalogValidationError> {
        validate_bounded_field(value.into(), "tag.name", MAX_TAG_NAME_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Lowercased key for case-insensitive uniqueness.
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TagName {
    type Error = CatalogValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TagName> for String {
    fn from(value: TagName) -> Self {
        value.0
    }
}

/// Input payload for [`Tag::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct TagDraft {
    pub id: TagId,
    pub name: String,
}

/// Free-form label attached to events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    id: TagId,
    name: TagName,
}

impl Tag {
    /// Validate and construct a tag.
    pub fn new(draft: TagDraft) -> Result<Self, CatalogValidationError> {
        Ok(Self::from_parts(draft.id, TagName::new(draft.name)?))
    }

    /// Assemble a tag from an already validated name.
    pub fn from_parts(id: TagId, name: TagName) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> TagId {
        self.id
    }
    pub fn name(&self) -> &TagName {
        &self.name
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Self::new(TagDraft::deserialize(deserializer)?).map_err(serde::de::Error::custom)
    }
}
