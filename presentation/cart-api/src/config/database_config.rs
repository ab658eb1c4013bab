use persistence::db::{DatabaseConfig, create_sqlite_pool, run_migrations};
use sqlx::SqlitePool;

use super::storage_config::StorageConfig;

/// Initialize the local storage pool and apply migrations
///
/// # Errors
/// Returns error if the database cannot be opened or migrated
pub async fn init_database(config: &StorageConfig) -> anyhow::Result<SqlitePool> {
    let pool = create_sqlite_pool(&DatabaseConfig::new(config.database_url.clone())).await?;
    run_migrations(&pool, &config.migrations_path).await?;
    Ok(pool)
}
