use std::time::Duration;

use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;

use super::error::ConfigError;

const DEFAULT_MIGRATIONS_PATH: &str = "./infrastructure/persistence/migrations";

/// Database connection settings plus where to find the schema migrations
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub pool: DatabaseConfig,
    pub migrations_path: String,
}

impl DatabaseSettings {
    /// Load database settings from environment variables
    ///
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
    /// - DATABASE_ACQUIRE_TIMEOUT_SECS: Pool acquire timeout (default: 30)
    /// - MIGRATIONS_PATH: Migrations directory (default: "./infrastructure/persistence/migrations")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup("DATABASE_URL").ok_or(ConfigError::MissingVariable("DATABASE_URL"))?;
        let mut pool = DatabaseConfig::new(url);

        if let Some(value) = lookup("DATABASE_MAX_CONNECTIONS") {
            pool.max_connections = value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "DATABASE_MAX_CONNECTIONS",
                value,
            })?;
        }

        if let Some(value) = lookup("DATABASE_ACQUIRE_TIMEOUT_SECS") {
            let secs: u64 = value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "DATABASE_ACQUIRE_TIMEOUT_SECS",
                value,
            })?;
            pool.acquire_timeout = Duration::from_secs(secs);
        }

        let migrations_path =
            lookup("MIGRATIONS_PATH").unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string());

        Ok(Self {
            pool,
            migrations_path,
        })
    }
}

/// Initialize the connection pool and bring the schema up to date
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(&settings.pool)
        .await
        .context("could not connect to the database")?;

    run_migrations(&pool, &settings.migrations_path)
        .await
        .with_context(|| format!("could not run migrations from {}", settings.migrations_path))?;

    tracing::info!("Database ready");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn should_require_database_url() {
        let result = DatabaseSettings::from_lookup(|_| None);
        assert!(matches!(
            result,
            Err(ConfigError::MissingVariable("DATABASE_URL"))
        ));
    }

    #[test]
    fn should_apply_defaults_when_only_url_is_set() {
        let settings =
            DatabaseSettings::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db/products")]))
                .unwrap();

        assert_eq!(settings.pool.connection_string, "postgres://db/products");
        assert_eq!(settings.pool.max_connections, 5);
        assert_eq!(settings.pool.acquire_timeout, Duration::from_secs(30));
        assert_eq!(settings.migrations_path, DEFAULT_MIGRATIONS_PATH);
    }

    #[test]
    fn should_override_pool_settings() {
        let settings = DatabaseSettings::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/products"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("DATABASE_ACQUIRE_TIMEOUT_SECS", "3"),
            ("MIGRATIONS_PATH", "/srv/migrations"),
        ]))
        .unwrap();

        assert_eq!(settings.pool.max_connections, 12);
        assert_eq!(settings.pool.acquire_timeout, Duration::from_secs(3));
        assert_eq!(settings.migrations_path, "/srv/migrations");
    }

    #[test]
    fn should_reject_non_numeric_pool_size() {
        let result = DatabaseSettings::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/products"),
            ("DATABASE_MAX_CONNECTIONS", "many"),
        ]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { name: "DATABASE_MAX_CONNECTIONS", .. })
        ));
    }
}
