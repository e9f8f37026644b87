//! CategoryStorage implementation for SQLite

use super::{
    category_from_row, group_by_key, product_from_row, SqliteCatalogStore, PRODUCT_COLUMNS,
};
use async_trait::async_trait;
use rusqlite::{params, OptionalExtension};
use storefront_core::storage::{CategoryStorage, StorageResult};
use storefront_core::types::{Category, CategoryChanges, CategoryWithProducts, NewCategory};
use tracing::info;

#[async_trait]
impl CategoryStorage for SqliteCatalogStore {
    async fn list_categories(&self) -> StorageResult<Vec<CategoryWithProducts>> {
        self.run("list_categories", |conn| {
            let mut products = group_by_key(
                conn,
                &format!(
                    "SELECT p.category_id, {PRODUCT_COLUMNS} FROM products p
                     WHERE p.category_id IS NOT NULL
                     ORDER BY p.id"
                ),
                [],
                product_from_row,
            )?;

            let mut stmt = conn.prepare("SELECT id, category_name FROM categories ORDER BY id")?;
            let categories = stmt
                .query_map([], |row| category_from_row(row, 0))?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            Ok(categories
                .into_iter()
                .map(|category| CategoryWithProducts {
                    products: products.remove(&category.id).unwrap_or_default(),
                    category,
                })
                .collect())
        })
        .await
    }

    async fn get_category(&self, id: i64) -> StorageResult<Option<CategoryWithProducts>> {
        self.run("get_category", move |conn| {
            let category = conn
                .query_row(
                    "SELECT id, category_name FROM categories WHERE id = ?1",
                    [id],
                    |row| category_from_row(row, 0),
                )
                .optional()?;

            let Some(category) = category else {
                return Ok(None);
            };

            let mut stmt = conn.prepare(&format!(
                "SELECT {PRODUCT_COLUMNS} FROM products p WHERE p.category_id = ?1 ORDER BY p.id"
            ))?;
            let products = stmt
                .query_map([id], |row| product_from_row(row, 0))?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            Ok(Some(CategoryWithProducts { category, products }))
        })
        .await
    }

    async fn create_category(&self, category: NewCategory) -> StorageResult<Category> {
        self.run("create_category", move |conn| {
            conn.execute(
                "INSERT INTO categories (category_name) VALUES (?1)",
                [&category.category_name],
            )?;

            Ok(Category {
                id: conn.last_insert_rowid(),
                category_name: category.category_name,
            })
        })
        .await
    }

    async fn update_category(&self, id: i64, changes: CategoryChanges) -> StorageResult<usize> {
        self.run("update_category", move |conn| {
            let matched = match changes.category_name {
                Some(name) => conn.execute(
                    "UPDATE categories SET category_name = ?1 WHERE id = ?2",
                    params![name, id],
                )?,
                None => conn.query_row(
                    "SELECT COUNT(*) FROM categories WHERE id = ?1",
                    [id],
                    |row| row.get::<_, i64>(0),
                )? as usize,
            };
            Ok(matched)
        })
        .await
    }

    async fn delete_category(&self, id: i64) -> StorageResult<usize> {
        self.run("delete_category", move |conn| {
            let tx = conn.transaction()?;

            // Children first: links of owned products, then the products
            let links = tx.execute(
                "DELETE FROM product_tags
                 WHERE product_id IN (SELECT id FROM products WHERE category_id = ?1)",
                [id],
            )?;
            let products = tx.execute("DELETE FROM products WHERE category_id = ?1", [id])?;
            let deleted = tx.execute("DELETE FROM categories WHERE id = ?1", [id])?;

            tx.commit()?;

            if deleted > 0 {
                info!(category_id = id, products, links, "Deleted category");
            }
            Ok(deleted)
        })
        .await
    }
}
