//! PostgreSQL-backed tag adapter.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::query_builder::QueryFragment;
use diesel_async::AsyncConnection as _;
use diesel_async::methods::LoadQuery;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{AttachOutcome, TagRepository, TagRepositoryError};
use crate::domain::{EventId, Tag, TagDraft, TagId, TagName};

use super::diesel_helpers::{
    collect_rows, is_unique_violation, lower, map_basic_diesel_error, parse_id,
};
use super::models::{EventTagRow, NewTagRow, TagRow};
use super::pool::{DbPool, PoolError};
use super::schema::{event_tags, events, tags};

/// Diesel-backed implementation of the tag repository port.
#[derive(Clone)]
pub struct DieselTagRepository {
    pool: DbPool,
}

impl DieselTagRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Failure inside a tag write transaction.
#[derive(Debug)]
enum TxError {
    Diesel(diesel::result::Error),
    EventMissing(EventId),
    TagMissing(TagId),
}

impl From<diesel::result::Error> for TxError {
    fn from(value: diesel::result::Error) -> Self {
        Self::Diesel(value)
    }
}

fn map_pool_error(error: PoolError) -> TagRepositoryError {
    TagRepositoryError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error, operation: &str) -> TagRepositoryError {
    map_basic_diesel_error(
        error,
        operation,
        TagRepositoryError::query,
        TagRepositoryError::connection,
    )
}

fn map_write_error(error: diesel::result::Error, name: &TagName, operation: &str) -> TagRepositoryError {
    if is_unique_violation(&error) {
        TagRepositoryError::duplicate_name(name.as_str())
    } else {
        map_diesel_error(error, operation)
    }
}

fn map_tx_error(error: TxError, name: Option<&TagName>, operation: &str) -> TagRepositoryError {
    match error {
        TxError::EventMissing(event_id) => TagRepositoryError::event_not_found(event_id),
        TxError::TagMissing(tag_id) => TagRepositoryError::tag_not_found(tag_id),
        TxError::Diesel(err) => match name {
            Some(name) => map_write_error(err, name, operation),
            None => map_diesel_error(err, operation),
        },
    }
}

fn row_to_tag(row: TagRow) -> Result<Tag, String> {
    Tag::new(TagDraft {
        id: parse_id(row.id)?,
        name: row.name,
    })
    .map_err(|err| err.to_string())
}

async fn event_exists(
    conn: &mut AsyncPgConnection,
    event_id: EventId,
) -> Result<bool, diesel::result::Error> {
    diesel::select(diesel::dsl::exists(events::table.find(event_id.get())))
        .get_result(conn)
        .await
}

async fn tag_named(
    conn: &mut AsyncPgConnection,
    name: &TagName,
) -> Result<Option<TagRow>, diesel::result::Error> {
    tags::table
        .filter(lower(tags::name).eq(name.normalized()))
        .select(TagRow::as_select())
        .first(conn)
        .await
        .optional()
}

/// Tags ordered by case-folded name, then id.
fn tags_by_name() -> impl LoadQuery<'static, AsyncPgConnection, TagRow> + QueryFragment<Pg> {
    tags::table
        .select(TagRow::as_select())
        .order_by((lower(tags::name), tags::id))
}

/// Insert a tag unless the name is already taken.
///
/// Yields no row when another transaction holds the name.
fn insert_unless_taken(
    name: &str,
) -> impl LoadQuery<'_, AsyncPgConnection, TagRow> + QueryFragment<Pg> + '_ {
    diesel::insert_into(tags::table)
        .values(NewTagRow { name })
        .on_conflict_do_nothing()
        .returning(TagRow::as_returning())
}

/// Insert the tag, or load the row a concurrent writer committed first.
async fn claim_tag(
    conn: &mut AsyncPgConnection,
    name: &TagName,
) -> Result<TagRow, diesel::result::Error> {
    let inserted = insert_unless_taken(name.as_str())
        .get_result(conn)
        .await
        .optional()?;
    match inserted {
        Some(row) => Ok(row),
        None => tag_named(conn, name)
            .await?
            .ok_or(diesel::result::Error::NotFound),
    }
}

#[async_trait]
impl TagRepository for DieselTagRepository {
    async fn list_all(&self) -> Result<Vec<Tag>, TagRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<TagRow> = tags_by_name()
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "list tags"))?;
        collect_rows(rows.into_iter().map(row_to_tag), TagRepositoryError::query)
    }

    async fn find_by_id(&self, id: TagId) -> Result<Option<Tag>, TagRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<TagRow> = tags::table
            .find(id.get())
            .select(TagRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "find tag"))?;
        row.map(row_to_tag)
            .transpose()
            .map_err(TagRepositoryError::query)
    }

    async fn create(&self, name: &TagName) -> Result<Tag, TagRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: TagRow = diesel::insert_into(tags::table)
            .values(&NewTagRow {
                name: name.as_str(),
            })
            .returning(TagRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_write_error(err, name, "create tag"))?;
        row_to_tag(row).map_err(TagRepositoryError::query)
    }

    async fn create_and_attach(
        &self,
        name: &TagName,
        event_id: EventId,
    ) -> Result<Tag, TagRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = conn
            .transaction(|conn| {
                async move {
                    if !event_exists(conn, event_id).await? {
                        return Err(TxError::EventMissing(event_id));
                    }
                    let row = match tag_named(conn, name).await? {
                        Some(existing) => existing,
                        None => claim_tag(conn, name).await?,
                    };
                    diesel::insert_into(event_tags::table)
                        .values(&EventTagRow {
                            event_id: event_id.get(),
                            tag_id: row.id,
                        })
                        .on_conflict_do_nothing()
                        .execute(conn)
                        .await?;
                    Ok(row)
                }
                .scope_boxed()
            })
            .await
            .map_err(|err| map_tx_error(err, Some(name), "create and attach tag"))?;
        row_to_tag(row).map_err(TagRepositoryError::query)
    }

    async fn attach(
        &self,
        tag_id: TagId,
        event_id: EventId,
    ) -> Result<AttachOutcome, TagRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        conn.transaction(|conn| {
            async move {
                let tag_exists: bool =
                    diesel::select(diesel::dsl::exists(tags::table.find(tag_id.get())))
                        .get_result(conn)
                        .await?;
                if !tag_exists {
                    return Err(TxError::TagMissing(tag_id));
                }
                if !event_exists(conn, event_id).await? {
                    return Err(TxError::EventMissing(event_id));
                }
                let inserted = diesel::insert_into(event_tags::table)
                    .values(&EventTagRow {
                        event_id: event_id.get(),
                        tag_id: tag_id.get(),
                    })
                    .on_conflict_do_nothing()
                    .execute(conn)
                    .await?;
                Ok(if inserted == 0 {
                    AttachOutcome::AlreadyAttached
                } else {
                    AttachOutcome::Attached
                })
            }
            .scope_boxed()
        })
        .await
        .map_err(|err| map_tx_error(err, None, "attach tag"))
    }

    async fn detach(&self, tag_id: TagId, event_id: EventId) -> Result<bool, TagRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(
            event_tags::table
                .filter(event_tags::event_id.eq(event_id.get()))
                .filter(event_tags::tag_id.eq(tag_id.get())),
        )
        .execute(&mut conn)
        .await
        .map_err(|err| map_diesel_error(err, "detach tag"))?;
        Ok(removed > 0)
    }
}
