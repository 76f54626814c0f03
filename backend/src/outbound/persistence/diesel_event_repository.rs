//! PostgreSQL-backed event read adapter.
//!
//! Each call loads event rows and their names, tiers, and tags inside one
//! transaction so the projection reflects a single snapshot.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::AsyncConnection as _;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{EventRepository, EventRepositoryError};
use crate::domain::{CategoryId, EventDto, EventFilter, EventId};

use super::diesel_helpers::{lower, map_basic_diesel_error};
use super::event_projection::{ProjectionError, project_events};
use super::models::{EventRow, EventTagRow};
use super::pool::{DbPool, PoolError};
use super::schema::{cities, event_tags, events};

/// Diesel-backed implementation of the event repository port.
#[derive(Clone)]
pub struct DieselEventRepository {
    pool: DbPool,
}

impl DieselEventRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> EventRepositoryError {
    EventRepositoryError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error, operation: &str) -> EventRepositoryError {
    map_basic_diesel_error(
        error,
        operation,
        EventRepositoryError::query,
        EventRepositoryError::connection,
    )
}

fn map_projection_error(error: ProjectionError, operation: &str) -> EventRepositoryError {
    match error {
        ProjectionError::Diesel(err) => map_diesel_error(err, operation),
        ProjectionError::Invalid(message) => {
            EventRepositoryError::query(format!("{operation}: {message}"))
        }
    }
}

/// Event ids carrying every listed tag.
async fn event_ids_tagged_with_all(
    conn: &mut AsyncPgConnection,
    tag_ids: &[i32],
) -> Result<Vec<i32>, diesel::result::Error> {
    let rows: Vec<EventTagRow> = event_tags::table
        .filter(event_tags::tag_id.eq_any(tag_ids.to_vec()))
        .select(EventTagRow::as_select())
        .load(conn)
        .await?;
    let mut counts: HashMap<i32, usize> = HashMap::new();
    for row in rows {
        *counts.entry(row.event_id).or_default() += 1;
    }
    Ok(counts
        .into_iter()
        .filter(|(_, count)| *count == tag_ids.len())
        .map(|(event_id, _)| event_id)
        .collect())
}

type EventSearch = diesel::dsl::IntoBoxed<
    'static,
    diesel::dsl::Select<events::table, diesel::dsl::AsSelect<EventRow, Pg>>,
    Pg,
>;

/// Category, city, and start-time predicates of `filter`.
fn filtered_events(filter: &EventFilter) -> EventSearch {
    let mut query = events::table.select(EventRow::as_select()).into_boxed();

    if let Some(category_id) = filter.category_id() {
        query = query.filter(events::category_id.eq(category_id.get()));
    }
    if let Some(city) = filter.city() {
        let city_ids = cities::table
            .filter(lower(cities::name).eq(lower(city.to_owned())))
            .select(cities::id);
        query = query.filter(events::city_id.eq_any(city_ids));
    }
    if let Some(from) = filter.starts_at_or_after() {
        query = query.filter(events::start_time.ge(from));
    }
    if let Some(before) = filter.starts_before() {
        query = query.filter(events::start_time.lt(before));
    }
    query
}

async fn search_rows(
    conn: &mut AsyncPgConnection,
    filter: &EventFilter,
) -> Result<Vec<EventRow>, diesel::result::Error> {
    let mut query = filtered_events(filter);

    if !filter.tag_ids().is_empty() {
        let tag_ids: Vec<i32> = filter.tag_ids().iter().map(|id| id.get()).collect();
        let event_ids = event_ids_tagged_with_all(conn, &tag_ids).await?;
        if event_ids.is_empty() {
            return Ok(Vec::new());
        }
        query = query.filter(events::id.eq_any(event_ids));
    }

    query
        .order_by((events::start_time, events::id))
        .limit(i64::from(filter.limit()))
        .load(conn)
        .await
}

#[async_trait]
impl EventRepository for DieselEventRepository {
    async fn find_by_id(&self, id: EventId) -> Result<Option<EventDto>, EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        conn.transaction(|conn| {
            async move {
                let row: Option<EventRow> = events::table
                    .find(id.get())
                    .select(EventRow::as_select())
                    .first(conn)
                    .await
                    .optional()?;
                let rows = row.into_iter().collect();
                Ok::<_, ProjectionError>(project_events(conn, rows).await?.pop())
            }
            .scope_boxed()
        })
        .await
        .map_err(|err| map_projection_error(err, "find event"))
    }

    async fn list_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<EventDto>, EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        conn.transaction(|conn| {
            async move {
                let rows: Vec<EventRow> = events::table
                    .filter(events::category_id.eq(category_id.get()))
                    .select(EventRow::as_select())
                    .order_by((events::start_time, events::id))
                    .load(conn)
                    .await?;
                project_events(conn, rows).await
            }
            .scope_boxed()
        })
        .await
        .map_err(|err| map_projection_error(err, "list category events"))
    }

    async fn search(&self, filter: &EventFilter) -> Result<Vec<EventDto>, EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        conn.transaction(|conn| {
            async move {
                let rows = search_rows(conn, filter).await?;
                project_events(conn, rows).await
            }
            .scope_boxed()
        })
        .await
        .map_err(|err| map_projection_error(err, "search events"))
    }

    async fn exists(&self, id: EventId) -> Result<bool, EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(diesel::dsl::exists(events::table.find(id.get())))
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "check event exists"))
    }
}
