//! PostgreSQL-backed category read adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CategoryRepository, CategoryRepositoryError};
use crate::domain::{Category, CategoryDraft, CategoryId};

use super::diesel_helpers::{collect_rows, map_basic_diesel_error, parse_id};
use super::models::CategoryRow;
use super::pool::{DbPool, PoolError};
use super::schema::categories;

/// Diesel-backed implementation of the category repository port.
#[derive(Clone)]
pub struct DieselCategoryRepository {
    pool: DbPool,
}

impl DieselCategoryRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CategoryRepositoryError {
    CategoryRepositoryError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error, operation: &str) -> CategoryRepositoryError {
    map_basic_diesel_error(
        error,
        operation,
        CategoryRepositoryError::query,
        CategoryRepositoryError::connection,
    )
}

fn row_to_category(row: CategoryRow) -> Result<Category, String> {
    Category::new(CategoryDraft {
        id: parse_id(row.id)?,
        name: row.name,
        slug: row.slug,
    })
    .map_err(|err| err.to_string())
}

#[async_trait]
impl CategoryRepository for DieselCategoryRepository {
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CategoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<CategoryRow> = categories::table
            .find(id.get())
            .select(CategoryRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "find category"))?;
        row.map(row_to_category)
            .transpose()
            .map_err(CategoryRepositoryError::query)
    }

    async fn list_all(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<CategoryRow> = categories::table
            .select(CategoryRow::as_select())
            .order_by((categories::name, categories::id))
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "list categories"))?;
        collect_rows(
            rows.into_iter().map(row_to_category),
            CategoryRepositoryError::query,
        )
    }
}
