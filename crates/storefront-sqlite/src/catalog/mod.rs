//! Catalog storage over SQLite
//!
//! [`SqliteCatalogStore`] implements every storage trait from
//! `storefront_core::storage`. Each trait lives in its own submodule; the
//! row mappers and grouping helpers they share are here.

mod category;
mod product;
mod product_tag;
mod tag;

use crate::connection::SqlitePool;
use crate::error::{SqliteError, SqliteResult};
use async_trait::async_trait;
use rusqlite::{Connection, Row};
use std::collections::HashMap;
use storefront_core::storage::{CatalogStore, StorageError, StorageResult};
use storefront_core::types::{Category, Product, ProductTag, Tag};
use tracing::debug;

/// SQLite implementation of the catalog persistence gateway
#[derive(Clone)]
pub struct SqliteCatalogStore {
    pool: SqlitePool,
}

impl SqliteCatalogStore {
    /// Create a store over an already-initialized pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run `f` against the connection on the blocking thread pool
    async fn run<F, T>(&self, op: &'static str, f: F) -> StorageResult<T>
    where
        F: FnOnce(&mut Connection) -> SqliteResult<T> + Send + 'static,
        T: Send + 'static,
    {
        debug!(op, "catalog query");
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || pool.with_connection_mut(f))
            .await
            .map_err(|e| StorageError::from(SqliteError::Task(e.to_string())))?
            .map_err(Into::into)
    }
}

#[async_trait]
impl CatalogStore for SqliteCatalogStore {
    async fn ping(&self) -> StorageResult<()> {
        self.run("ping", |conn| {
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
            Ok(())
        })
        .await
    }
}

/// Columns selected for a product, prefixed with the `p` alias
const PRODUCT_COLUMNS: &str = "p.id, p.product_name, p.price, p.stock, p.category_id";

fn category_from_row(row: &Row, offset: usize) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(offset)?,
        category_name: row.get(offset + 1)?,
    })
}

fn product_from_row(row: &Row, offset: usize) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(offset)?,
        product_name: row.get(offset + 1)?,
        price: row.get(offset + 2)?,
        stock: row.get(offset + 3)?,
        category_id: row.get(offset + 4)?,
    })
}

fn tag_from_row(row: &Row, offset: usize) -> rusqlite::Result<Tag> {
    Ok(Tag {
        id: row.get(offset)?,
        tag_name: row.get(offset + 1)?,
    })
}

fn product_tag_from_row(row: &Row) -> rusqlite::Result<ProductTag> {
    Ok(ProductTag {
        id: row.get(0)?,
        product_id: row.get(1)?,
        tag_id: row.get(2)?,
    })
}

/// Run a query whose first column is a grouping key and whose remaining
/// columns are mapped by `map` starting at offset 1
fn group_by_key<T, F>(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
    map: F,
) -> SqliteResult<HashMap<i64, Vec<T>>>
where
    F: Fn(&Row, usize) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, |row| Ok((row.get::<_, i64>(0)?, map(row, 1)?)))?;

    let mut grouped: HashMap<i64, Vec<T>> = HashMap::new();
    for row in rows {
        let (key, value) = row?;
        grouped.entry(key).or_default().push(value);
    }
    Ok(grouped)
}
