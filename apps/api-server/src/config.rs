//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use quill_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` when `DATABASE_URL` is unset; records then live in memory.
    pub database: Option<DatabaseConfig>,
}

fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| {
            let defaults = DatabaseConfig::new(url);
            DatabaseConfig {
                max_connections: parsed("DB_MAX_CONNECTIONS").unwrap_or(defaults.max_connections),
                min_connections: parsed("DB_MIN_CONNECTIONS").unwrap_or(defaults.min_connections),
                connect_timeout: parsed("DB_CONNECT_TIMEOUT_SECS")
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.connect_timeout),
                sqlx_logging: env::var("DB_LOG_STATEMENTS")
                    .map(|v| v == "true" || v == "1")
                    .unwrap_or(false),
                ..defaults
            }
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parsed("PORT").unwrap_or(8080),
            database,
        }
    }
}
