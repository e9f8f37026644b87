//! Catalog schema
//!
//! There is a single schema version. It is created idempotently when a pool
//! opens and recorded in `PRAGMA user_version`.

use crate::error::{SqliteError, SqliteResult};
use rusqlite::Connection;
use tracing::{debug, info};

/// Version stamped into `user_version` once the schema exists
pub const SCHEMA_VERSION: i32 = 1;

/// Create the catalog tables if they are missing
pub fn apply_schema(conn: &Connection) -> SqliteResult<()> {
    let current_version = current_version(conn)?;
    debug!(current_version, target_version = SCHEMA_VERSION, "Checking schema");

    if current_version > SCHEMA_VERSION {
        return Err(SqliteError::Schema(format!(
            "database schema version {} is newer than supported version {}",
            current_version, SCHEMA_VERSION
        )));
    }

    conn.execute_batch(SCHEMA)
        .map_err(|e| SqliteError::Schema(format!("Failed to apply schema: {}", e)))?;

    if current_version < SCHEMA_VERSION {
        conn.execute_batch(&format!("PRAGMA user_version = {};", SCHEMA_VERSION))?;
        info!(version = SCHEMA_VERSION, "Catalog schema created");
    }

    Ok(())
}

/// Schema version recorded in the database file
pub fn current_version(conn: &Connection) -> SqliteResult<i32> {
    let version: i32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    Ok(version)
}

/// Catalog tables
///
/// Foreign keys carry no ON DELETE actions: dependent rows are removed
/// explicitly by the store before their parent.
/// `product_tags` has no uniqueness constraint on (product_id, tag_id).
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    category_name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    product_name TEXT NOT NULL,
    price REAL NOT NULL,
    stock INTEGER NOT NULL DEFAULT 10,
    category_id INTEGER REFERENCES categories(id)
);

CREATE INDEX IF NOT EXISTS idx_products_category ON products(category_id);

CREATE TABLE IF NOT EXISTS tags (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    tag_name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS product_tags (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    product_id INTEGER NOT NULL REFERENCES products(id),
    tag_id INTEGER NOT NULL REFERENCES tags(id)
);

CREATE INDEX IF NOT EXISTS idx_product_tags_product ON product_tags(product_id);
CREATE INDEX IF NOT EXISTS idx_product_tags_tag ON product_tags(tag_id);
"#;
