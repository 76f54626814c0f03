//! Apply embedded database migrations and exit.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use eventshop::outbound::persistence::run_pending_migrations;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// `migrate` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "migrate",
    about = "Apply pending catalogue schema migrations",
    version
)]
struct CliArgs {
    /// Database connection URL. Falls back to `EVENTSHOP_DATABASE_URL`.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
}

fn resolve_database_url(arg: Option<String>) -> Result<String> {
    arg.or_else(|| env::var("EVENTSHOP_DATABASE_URL").ok())
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| eyre!("pass --database-url or set EVENTSHOP_DATABASE_URL"))
}

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let database_url = resolve_database_url(args.database_url)?;
    let applied = run_pending_migrations(&database_url).wrap_err("apply migrations")?;
    info!(count = applied.len(), "migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use env_lock::lock_env;
    use rstest::rstest;

    #[rstest]
    fn cli_argument_wins_over_environment() {
        let _guard = lock_env([("EVENTSHOP_DATABASE_URL", Some("postgres://env/db".to_owned()))]);
        let url = resolve_database_url(Some("postgres://cli/db".to_owned())).expect("url");
        assert_eq!(url, "postgres://cli/db");
    }

    #[rstest]
    fn missing_url_is_an_error() {
        let _guard = lock_env([("EVENTSHOP_DATABASE_URL", None::<String>)]);
        assert!(resolve_database_url(None).is_err());
    }
}
