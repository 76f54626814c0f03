//! Read-side port for event categories.

use async_trait::async_trait;

use crate::domain::{Category, CategoryId};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading categories.
    pub enum CategoryRepositoryError for "category repository" {}
}

/// Port for loading categories from storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Fetch a single category, returning `None` when it does not exist.
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CategoryRepositoryError>;

    /// List every category ordered by name, then id.
    async fn list_all(&self) -> Result<Vec<Category>, CategoryRepositoryError>;
}

/// Fixture implementation backed by an empty catalogue.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCategoryRepository;

#[async_trait]
impl CategoryRepository for FixtureCategoryRepository {
    async fn find_by_id(&self, _id: CategoryId) -> Result<Option<Category>, CategoryRepositoryError> {
        Ok(None)
    }

    async fn list_all(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        Ok(Vec::new())
    }
}
