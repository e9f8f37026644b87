//! SQLite storage backend for storefront
//!
//! This crate implements the catalog storage traits from `storefront-core`
//! on top of a single SQLite database.
//!
//! ## Features
//!
//! - **Cascading deletes**: category, product and tag removal clean up their
//!   dependents inside one transaction
//! - **WAL Mode**: write-ahead logging for file-backed databases
//! - **Thread Safety**: Arc<Mutex<Connection>> pattern, queries run on the
//!   blocking thread pool
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storefront_sqlite::{SqliteCatalogStore, SqliteConfig, SqlitePool};
//! use storefront_core::storage::ProductStorage;
//!
//! let pool = SqlitePool::new(SqliteConfig::new("./storefront.db"))?;
//! let store = SqliteCatalogStore::new(pool);
//!
//! let products = store.list_products().await?;
//! ```

pub mod catalog;
pub mod config;
pub mod connection;
pub mod error;
pub mod schema;

// Re-exports
pub use catalog::SqliteCatalogStore;
pub use config::SqliteConfig;
pub use connection::SqlitePool;
pub use error::{SqliteError, SqliteResult};
