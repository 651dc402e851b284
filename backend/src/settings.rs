//! Application settings loaded via OrthoConfig.
//!
//! Values merge CLI flags, `CAR_API_*` environment variables and config
//! files. Numeric settings carry defaults; the two connection URLs are
//! optional at load time and checked when the server starts.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::CarServiceSettings;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Missing mandatory setting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required setting `{0}` (set CAR_API_{1})")]
pub struct MissingSetting(&'static str, &'static str);

/// Configuration values for the car API server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CAR_API")]
pub struct AppSettings {
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Redis connection URL.
    pub cache_url: Option<String>,
    /// Upper bound, in seconds, on each car operation.
    #[ortho_config(default = 2)]
    pub context_timeout_secs: u64,
    /// Lifetime, in seconds, of the cached car list.
    #[ortho_config(default = 30)]
    pub list_cache_ttl_secs: u64,
    /// Interface the HTTP server binds to.
    pub host: Option<String>,
    /// Port the HTTP server binds to.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Maximum pooled database connections.
    #[ortho_config(default = 10)]
    pub db_max_connections: u32,
}

impl AppSettings {
    /// Return the database URL.
    ///
    /// # Errors
    /// Returns [`MissingSetting`] when no URL was configured.
    pub fn database_url(&self) -> Result<&str, MissingSetting> {
        self.database_url
            .as_deref()
            .ok_or(MissingSetting("database_url", "DATABASE_URL"))
    }

    /// Return the cache URL.
    ///
    /// # Errors
    /// Returns [`MissingSetting`] when no URL was configured.
    pub fn cache_url(&self) -> Result<&str, MissingSetting> {
        self.cache_url
            .as_deref()
            .ok_or(MissingSetting("cache_url", "CACHE_URL"))
    }

    /// Per-operation deadline.
    pub fn context_timeout(&self) -> Duration {
        Duration::from_secs(self.context_timeout_secs)
    }

    /// Time-to-live of the cached car list.
    pub fn list_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.list_cache_ttl_secs)
    }

    /// Bind interface, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Bind port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Database pool size.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
    }

    /// Deadlines and expiries for the car service.
    pub fn service_settings(&self) -> CarServiceSettings {
        CarServiceSettings {
            operation_timeout: self.context_timeout(),
            list_cache_ttl: self.list_cache_ttl(),
            ..CarServiceSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 7] = [
        "CAR_API_DATABASE_URL",
        "CAR_API_CACHE_URL",
        "CAR_API_CONTEXT_TIMEOUT_SECS",
        "CAR_API_LIST_CACHE_TTL_SECS",
        "CAR_API_HOST",
        "CAR_API_PORT",
        "CAR_API_DB_MAX_CONNECTIONS",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("car-api")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), 8080);
        assert_eq!(settings.db_max_connections(), 10);
        assert_eq!(settings.service_settings(), CarServiceSettings::default());
        assert_eq!(
            settings.database_url(),
            Err(MissingSetting("database_url", "DATABASE_URL"))
        );
        assert!(settings.cache_url().is_err());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "CAR_API_DATABASE_URL",
                Some("postgres://cars@localhost/cars".to_owned()),
            ),
            ("CAR_API_CACHE_URL", Some("redis://localhost:6379".to_owned())),
            ("CAR_API_CONTEXT_TIMEOUT_SECS", Some("5".to_owned())),
            ("CAR_API_LIST_CACHE_TTL_SECS", Some("60".to_owned())),
            ("CAR_API_HOST", Some("127.0.0.1".to_owned())),
            ("CAR_API_PORT", Some("9090".to_owned())),
            ("CAR_API_DB_MAX_CONNECTIONS", Some("4".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.database_url(), Ok("postgres://cars@localhost/cars"));
        assert_eq!(settings.cache_url(), Ok("redis://localhost:6379"));
        assert_eq!(settings.host(), "127.0.0.1");
        assert_eq!(settings.port(), 9090);
        assert_eq!(settings.db_max_connections(), 4);
        assert_eq!(
            settings.service_settings(),
            CarServiceSettings {
                operation_timeout: Duration::from_secs(5),
                list_cache_ttl: Duration::from_secs(60),
                ..CarServiceSettings::default()
            }
        );
    }

    #[rstest]
    fn missing_setting_names_the_variable() {
        let message = MissingSetting("cache_url", "CACHE_URL").to_string();
        assert_eq!(message, "missing required setting `cache_url` (set CAR_API_CACHE_URL)");
    }
}
