//! SQLite connection settings

use std::path::{Path, PathBuf};

const MEMORY_PATH: &str = ":memory:";

/// Settings applied when a [`SqlitePool`](crate::SqlitePool) opens its connection
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// Database file, or `:memory:`
    pub path: PathBuf,
    /// Use write-ahead logging (ignored for in-memory databases)
    pub wal_mode: bool,
    /// Enforce foreign key constraints
    pub foreign_keys: bool,
    /// How long a locked database is retried before failing
    pub busy_timeout_ms: u32,
    /// Page cache size; negative values are KiB
    pub cache_size: i64,
    /// Memory-mapped I/O size in bytes, 0 disables
    pub mmap_size: u64,
}

impl SqliteConfig {
    /// File-backed database at `path` with default settings
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Private in-memory database, mainly for tests
    pub fn memory() -> Self {
        Self {
            path: PathBuf::from(MEMORY_PATH),
            wal_mode: false,
            mmap_size: 0,
            ..Self::default()
        }
    }

    pub fn is_memory(&self) -> bool {
        self.path.to_str() == Some(MEMORY_PATH)
    }

    pub fn with_wal_mode(mut self, enabled: bool) -> Self {
        self.wal_mode = enabled;
        self
    }

    pub fn with_foreign_keys(mut self, enabled: bool) -> Self {
        self.foreign_keys = enabled;
        self
    }

    pub fn with_busy_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.busy_timeout_ms = timeout_ms;
        self
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./storefront.db"),
            wal_mode: true,
            foreign_keys: true,
            busy_timeout_ms: 5000,
            cache_size: -16000,
            mmap_size: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_config_disables_wal() {
        let config = SqliteConfig::memory();
        assert!(config.is_memory());
        assert!(!config.wal_mode);
        assert!(config.foreign_keys);
    }

    #[test]
    fn builder_overrides() {
        let config = SqliteConfig::new("/tmp/shop.db")
            .with_wal_mode(false)
            .with_foreign_keys(false)
            .with_busy_timeout_ms(250);

        assert!(!config.is_memory());
        assert!(!config.wal_mode);
        assert!(!config.foreign_keys);
        assert_eq!(config.busy_timeout_ms, 250);
    }
}
