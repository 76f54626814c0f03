//! Server settings loaded via OrthoConfig.
//!
//! Values layer CLI flags over `EVENTSHOP_*` environment variables over an
//! optional configuration file.

use std::net::{Ipv4Addr, SocketAddr};

use eventshop::outbound::persistence::DEFAULT_MAX_POOL_SIZE;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_PORT: u16 = 8080;

/// Configuration values controlling the HTTP listener and persistence.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EVENTSHOP")]
pub struct ServerSettings {
    /// Socket address to bind, `0.0.0.0:8080` by default.
    pub bind_address: Option<SocketAddr>,
    /// PostgreSQL connection string. Without it the server runs on fixtures.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = true)]
    pub run_migrations: bool,
}

impl ServerSettings {
    /// Return the configured bind address, falling back to the default.
    pub fn bind_address(&self) -> SocketAddr {
        self.bind_address
            .unwrap_or_else(|| SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)))
    }

    /// Return the database URL when one is configured and non-blank.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Return the configured pool size, falling back to the default.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_MAX_POOL_SIZE)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "EVENTSHOP_BIND_ADDRESS",
        "EVENTSHOP_DATABASE_URL",
        "EVENTSHOP_POOL_MAX_SIZE",
        "EVENTSHOP_RUN_MIGRATIONS",
    ];

    fn load_from_args(args: &[&str]) -> ServerSettings {
        let argv = std::iter::once(OsString::from("eventshop"))
            .chain(args.iter().map(OsString::from))
            .collect::<Vec<_>>();
        ServerSettings::load_from_iter(argv).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_args(&[]);
        assert_eq!(settings.bind_address(), "0.0.0.0:8080".parse().expect("addr"));
        assert!(settings.database_url().is_none());
        assert_eq!(settings.pool_max_size(), DEFAULT_MAX_POOL_SIZE);
        assert!(settings.run_migrations);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("EVENTSHOP_BIND_ADDRESS", Some("127.0.0.1:9090".to_owned())),
            (
                "EVENTSHOP_DATABASE_URL",
                Some("postgres://catalog@localhost/eventshop".to_owned()),
            ),
            ("EVENTSHOP_POOL_MAX_SIZE", Some("4".to_owned())),
            ("EVENTSHOP_RUN_MIGRATIONS", Some("false".to_owned())),
        ]);

        let settings = load_from_args(&[]);
        assert_eq!(settings.bind_address(), "127.0.0.1:9090".parse().expect("addr"));
        assert_eq!(
            settings.database_url(),
            Some("postgres://catalog@localhost/eventshop")
        );
        assert_eq!(settings.pool_max_size(), 4);
        assert!(!settings.run_migrations);
    }

    #[rstest]
    fn blank_database_url_counts_as_missing() {
        let _guard = lock_env([
            ("EVENTSHOP_BIND_ADDRESS", None),
            ("EVENTSHOP_DATABASE_URL", Some("   ".to_owned())),
            ("EVENTSHOP_POOL_MAX_SIZE", Some("0".to_owned())),
            ("EVENTSHOP_RUN_MIGRATIONS", None),
        ]);

        let settings = load_from_args(&[]);
        assert!(settings.database_url().is_none());
        assert_eq!(settings.pool_max_size(), DEFAULT_MAX_POOL_SIZE);
    }
}
