pub mod config;
pub mod seed;
pub mod serve;

use anyhow::{Context, Result};
use storefront_config::DatabaseConfig;
use storefront_sqlite::{SqliteCatalogStore, SqliteConfig, SqlitePool};

/// Open (and if needed create) the configured database
pub fn open_store(database: &DatabaseConfig) -> Result<SqliteCatalogStore> {
    let config = SqliteConfig::new(&database.path)
        .with_wal_mode(database.wal_mode)
        .with_foreign_keys(database.foreign_keys)
        .with_busy_timeout_ms(database.busy_timeout_ms);

    let pool = SqlitePool::new(config)
        .with_context(|| format!("Failed to open database: {}", database.path.display()))?;

    Ok(SqliteCatalogStore::new(pool))
}
