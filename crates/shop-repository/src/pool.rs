//! Database connection pool management.

use log::LevelFilter;
use shop_config::DatabaseConfig;
use shop_core::{ShopError, ShopResult};
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::ConnectOptions;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

/// Database pool wrapper.
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Creates a new database pool from configuration.
    pub async fn new(config: &DatabaseConfig) -> ShopResult<Self> {
        info!("Connecting to MySQL database...");

        let options = connect_options(config)?;

        let pool = MySqlPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(Some(config.idle_timeout()))
            .connect_with(options)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                ShopError::Database(format!("Failed to connect: {e}"))
            })?;

        info!("MySQL connection pool established");
        Ok(Self { pool })
    }

    /// Wraps an existing pool.
    #[must_use]
    pub fn with_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the underlying pool.
    #[must_use]
    pub fn inner(&self) -> &MySqlPool {
        &self.pool
    }

    /// Checks if the database connection is healthy.
    pub async fn health_check(&self) -> ShopResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| ShopError::Database(format!("Health check failed: {e}")))?;
        Ok(())
    }

    /// Runs database migrations.
    pub async fn run_migrations(&self) -> ShopResult<()> {
        info!("Running database migrations...");
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ShopError::Database(format!("Migration failed: {e}")))?;
        info!("Database migrations completed");
        Ok(())
    }

    /// Closes the database pool.
    pub async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}

/// Builds connection options with statement logging configured.
///
/// With `log_queries` off, only statements slower than the threshold are
/// logged.
fn connect_options(config: &DatabaseConfig) -> ShopResult<MySqlConnectOptions> {
    let options = MySqlConnectOptions::from_str(&config.url)
        .map_err(|e| ShopError::Configuration(format!("Invalid database URL: {e}")))?;

    let statements = if config.log_queries {
        LevelFilter::Debug
    } else {
        LevelFilter::Off
    };

    Ok(options
        .log_statements(statements)
        .log_slow_statements(LevelFilter::Warn, config.slow_query_threshold()))
}

/// Creates a shared database pool.
pub async fn create_pool(config: &DatabaseConfig) -> ShopResult<Arc<DatabasePool>> {
    let pool = DatabasePool::new(config).await?;
    Ok(Arc::new(pool))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_options_accepts_default_url() {
        assert!(connect_options(&DatabaseConfig::default()).is_ok());
    }

    #[test]
    fn test_connect_options_rejects_bad_url() {
        let config = DatabaseConfig {
            url: "not a url".to_string(),
            ..DatabaseConfig::default()
        };
        assert!(matches!(connect_options(&config), Err(ShopError::Configuration(_))));
    }
}
