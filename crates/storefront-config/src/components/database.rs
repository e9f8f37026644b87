//! Database configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// SQLite database settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database file; `:memory:` keeps everything in process
    pub path: PathBuf,
    /// Use write-ahead logging for file databases
    pub wal_mode: bool,
    /// Enforce foreign keys
    pub foreign_keys: bool,
    /// Lock wait before a query fails
    pub busy_timeout_ms: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./storefront.db"),
            wal_mode: true,
            foreign_keys: true,
            busy_timeout_ms: 5000,
        }
    }
}
