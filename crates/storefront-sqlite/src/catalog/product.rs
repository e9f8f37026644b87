//! ProductStorage implementation for SQLite

use super::{
    category_from_row, group_by_key, product_from_row, tag_from_row, SqliteCatalogStore,
    PRODUCT_COLUMNS,
};
use crate::error::SqliteResult;
use async_trait::async_trait;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use std::collections::HashMap;
use storefront_core::storage::{ProductStorage, StorageResult};
use storefront_core::types::{Category, NewProduct, Product, ProductChanges, ProductDetail, Tag};
use tracing::info;

#[async_trait]
impl ProductStorage for SqliteCatalogStore {
    async fn list_products(&self) -> StorageResult<Vec<ProductDetail>> {
        self.run("list_products", |conn| {
            let mut stmt = conn.prepare("SELECT id, category_name FROM categories")?;
            let categories: HashMap<i64, Category> = stmt
                .query_map([], |row| category_from_row(row, 0))?
                .map(|row| row.map(|category| (category.id, category)))
                .collect::<rusqlite::Result<_>>()?;

            let mut tags = group_by_key(
                conn,
                "SELECT pt.product_id, t.id, t.tag_name
                 FROM product_tags pt
                 JOIN tags t ON t.id = pt.tag_id
                 ORDER BY pt.id",
                [],
                tag_from_row,
            )?;

            let mut stmt =
                conn.prepare(&format!("SELECT {PRODUCT_COLUMNS} FROM products p ORDER BY p.id"))?;
            let products = stmt
                .query_map([], |row| product_from_row(row, 0))?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            Ok(products
                .into_iter()
                .map(|product| ProductDetail {
                    category: product
                        .category_id
                        .and_then(|id| categories.get(&id).cloned()),
                    tags: tags.remove(&product.id).unwrap_or_default(),
                    product,
                })
                .collect())
        })
        .await
    }

    async fn get_product(&self, id: i64) -> StorageResult<Option<ProductDetail>> {
        self.run("get_product", move |conn| {
            let Some(product) = select_product(conn, id)? else {
                return Ok(None);
            };

            let category = match product.category_id {
                Some(category_id) => conn
                    .query_row(
                        "SELECT id, category_name FROM categories WHERE id = ?1",
                        [category_id],
                        |row| category_from_row(row, 0),
                    )
                    .optional()?,
                None => None,
            };

            let mut stmt = conn.prepare(
                "SELECT t.id, t.tag_name
                 FROM product_tags pt
                 JOIN tags t ON t.id = pt.tag_id
                 WHERE pt.product_id = ?1
                 ORDER BY pt.id",
            )?;
            let tags = stmt
                .query_map([id], |row| tag_from_row(row, 0))?
                .collect::<rusqlite::Result<Vec<Tag>>>()?;

            Ok(Some(ProductDetail {
                product,
                category,
                tags,
            }))
        })
        .await
    }

    async fn find_product(&self, id: i64) -> StorageResult<Option<Product>> {
        self.run("find_product", move |conn| select_product(conn, id))
            .await
    }

    async fn create_product(&self, product: NewProduct) -> StorageResult<Product> {
        self.run("create_product", move |conn| {
            conn.execute(
                "INSERT INTO products (product_name, price, stock, category_id)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    product.product_name,
                    product.price,
                    product.stock,
                    product.category_id
                ],
            )?;

            Ok(Product {
                id: conn.last_insert_rowid(),
                product_name: product.product_name,
                price: product.price,
                stock: product.stock,
                category_id: product.category_id,
            })
        })
        .await
    }

    async fn update_product(&self, id: i64, changes: ProductChanges) -> StorageResult<usize> {
        self.run("update_product", move |conn| {
            let mut assignments: Vec<&str> = Vec::new();
            let mut values: Vec<Value> = Vec::new();

            if let Some(name) = changes.product_name {
                assignments.push("product_name = ?");
                values.push(Value::Text(name));
            }
            if let Some(price) = changes.price {
                assignments.push("price = ?");
                values.push(Value::Real(price));
            }
            if let Some(stock) = changes.stock {
                assignments.push("stock = ?");
                values.push(Value::Integer(stock));
            }
            if let Some(category_id) = changes.category_id {
                assignments.push("category_id = ?");
                values.push(category_id.map_or(Value::Null, Value::Integer));
            }

            if assignments.is_empty() {
                return Ok(select_product(conn, id)?.map_or(0, |_| 1));
            }

            values.push(Value::Integer(id));
            let sql = format!(
                "UPDATE products SET {} WHERE id = ?",
                assignments.join(", ")
            );
            Ok(conn.execute(&sql, params_from_iter(values))?)
        })
        .await
    }

    async fn delete_product(&self, id: i64) -> StorageResult<usize> {
        self.run("delete_product", move |conn| {
            let tx = conn.transaction()?;

            let links = tx.execute("DELETE FROM product_tags WHERE product_id = ?1", [id])?;
            let deleted = tx.execute("DELETE FROM products WHERE id = ?1", [id])?;

            tx.commit()?;

            if deleted > 0 {
                info!(product_id = id, links, "Deleted product");
            }
            Ok(deleted)
        })
        .await
    }
}

fn select_product(conn: &Connection, id: i64) -> SqliteResult<Option<Product>> {
    let product = conn
        .query_row(
            &format!("SELECT {PRODUCT_COLUMNS} FROM products p WHERE p.id = ?1"),
            [id],
            |row| product_from_row(row, 0),
        )
        .optional()?;
    Ok(product)
}
