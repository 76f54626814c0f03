//! Runtime wiring chosen at startup: listener address, catalogue store, and
//! optional metrics.

use eventshop::outbound::persistence::DbPool;
use std::fmt;
use std::net::SocketAddr;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

/// Backing store for the catalogue repositories.
#[derive(Clone, Default)]
pub enum CatalogStore {
    /// Empty fixtures; reads succeed with no rows and writes report missing
    /// events.
    #[default]
    Fixtures,
    /// PostgreSQL through the Diesel adapters.
    Database(DbPool),
}

impl fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixtures => f.write_str("Fixtures"),
            Self::Database(_) => f.write_str("Database"),
        }
    }
}

/// Everything `create_server` needs beyond the health state.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: CatalogStore,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Serve the fixture catalogue on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            store: CatalogStore::Fixtures,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Serve the catalogue from PostgreSQL.
    #[must_use]
    pub fn with_db_pool(self, pool: DbPool) -> Self {
        Self {
            store: CatalogStore::Database(pool),
            ..self
        }
    }

    #[cfg(feature = "metrics")]
    /// Record request metrics and expose them on `/metrics`.
    #[must_use]
    pub fn with_metrics(self, prometheus: Option<PrometheusMetrics>) -> Self {
        Self { prometheus, ..self }
    }
}
