//! Backend entry-point: loads settings, prepares the database, and serves
//! the catalogue API.

mod server;

use std::time::Duration;

use actix_web::web;
use color_eyre::eyre::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use eventshop::inbound::http::health::HealthState;
use eventshop::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations_blocking};
use ortho_config::OrthoConfig;
use server::{ServerConfig, ServerSettings, create_server};

const POOL_CONNECTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().wrap_err("failed to load server settings")?;
    let config = build_config(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    info!(bind_address = %settings.bind_address(), "starting catalogue server");
    let server = create_server(health_state, config).wrap_err("failed to start server")?;
    server.await.wrap_err("server terminated with an error")
}

async fn build_config(settings: &ServerSettings) -> Result<ServerConfig> {
    let config = ServerConfig::new(settings.bind_address());
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(server::make_metrics());

    let Some(database_url) = settings.database_url() else {
        warn!("EVENTSHOP_DATABASE_URL not set; persistence disabled");
        return Ok(config);
    };

    if settings.run_migrations {
        let applied = run_pending_migrations_blocking(database_url.to_owned())
            .await
            .wrap_err("failed to apply database migrations")?;
        info!(count = applied.len(), "database schema up to date");
    }

    let pool = DbPool::new(
        PoolConfig::new(database_url)
            .with_max_size(settings.pool_max_size())
            .with_connection_timeout(POOL_CONNECTION_TIMEOUT),
    )
    .await
    .wrap_err("failed to build database pool")?;
    Ok(config.with_db_pool(pool))
}
