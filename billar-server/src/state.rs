//! Application state

use sqlx::SqlitePool;

use crate::BoxError;
use crate::config::Config;
use crate::db;

/// Shared application state
///
/// Everything a handler needs is reached through here; the server keeps no
/// other process-wide mutable state.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    pub config: Config,
}

impl AppState {
    /// Open the database, apply migrations and seed if configured
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = db::connect(&config.database_url).await?;

        if config.seed_on_startup {
            db::seed::seed_if_empty(&pool).await?;
        }

        Ok(Self::with_pool(pool, config.clone()))
    }

    /// Wrap an already migrated pool
    pub fn with_pool(pool: SqlitePool, config: Config) -> Self {
        Self { pool, config }
    }
}
