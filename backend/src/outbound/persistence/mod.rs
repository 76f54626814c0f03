//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories implement the domain's repository ports over a `bb8` pool of
//! `diesel-async` connections. Row structs (`models`) and table definitions
//! (`schema`) stay private to this module; repositories convert rows into
//! validated domain entities and report failures through each port's error
//! enum.
//!
//! # Example
//!
//! ```ignore
//! use eventshop::outbound::persistence::{DbPool, DieselTagRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/eventshop")).await?;
//! let tags = DieselTagRepository::new(pool);
//! ```

mod diesel_category_repository;
mod diesel_event_repository;
pub(crate) mod diesel_helpers;
mod diesel_tag_repository;
mod event_projection;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_category_repository::DieselCategoryRepository;
pub use diesel_event_repository::DieselEventRepository;
pub use diesel_tag_repository::DieselTagRepository;
pub use migrations::{
    MIGRATIONS, MigrationError, run_pending_migrations, run_pending_migrations_blocking,
};
pub use pool::{DEFAULT_MAX_POOL_SIZE, DbPool, PoolConfig, PoolError};
