//! Event category entity.

use serde::{Deserialize, Serialize};

use super::CatalogValidationError;
use super::ids::CategoryId;
use super::validation::{validate_bounded_field, validate_optional_slug};

const MAX_CATEGORY_NAME_CHARS: usize = 100;

/// Input payload for [`Category::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct CategoryDraft {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

/// Category events are grouped under, such as concerts or sports.
///
/// ## Invariants
/// - `name` is trimmed, non-empty and at most 100 characters.
/// - `slug`, when present, is a valid URL slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    id: CategoryId,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    slug: Option<String>,
}

impl Category {
    /// Validate and construct a category.
    ///
    /// # Examples
    /// ```
    /// use eventshop::domain::{Category, CategoryDraft, CategoryId};
    ///
    /// let category = Category::new(CategoryDraft {
    ///     id: CategoryId::new(1).expect("valid id"),
    ///     name: "Concerts".to_owned(),
    ///     slug: Some("concerts".to_owned()),
    /// })
    /// .expect("valid category");
    /// assert_eq!(category.slug(), Some("concerts"));
    /// ```
    pub fn new(draft: CategoryDraft) -> Result<Self, CatalogValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }
}

impl TryFrom<CategoryDraft> for Category {
    type Error = CatalogValidationError;

    fn try_from(draft: CategoryDraft) -> Result<Self, Self::Error> {
        let name = validate_bounded_field(draft.name, "category.name", MAX_CATEGORY_NAME_CHARS)?;
        let slug = validate_optional_slug(draft.slug, "category.slug")?;
        Ok(Self {
            id: draft.id,
            name,
            slug,
        })
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        CategoryDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}
