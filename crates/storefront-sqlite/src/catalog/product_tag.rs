//! ProductTagStorage implementation for SQLite

use super::{product_tag_from_row, SqliteCatalogStore};
use async_trait::async_trait;
use rusqlite::{params, params_from_iter};
use storefront_core::storage::{ProductTagStorage, StorageResult};
use storefront_core::types::{NewProductTag, ProductTag};

#[async_trait]
impl ProductTagStorage for SqliteCatalogStore {
    async fn product_tags(&self, product_id: i64) -> StorageResult<Vec<ProductTag>> {
        self.run("product_tags", move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, product_id, tag_id FROM product_tags
                 WHERE product_id = ?1
                 ORDER BY id",
            )?;
            let rows = stmt
                .query_map([product_id], product_tag_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        })
        .await
    }

    async fn bulk_create_product_tags(
        &self,
        rows: Vec<NewProductTag>,
    ) -> StorageResult<Vec<ProductTag>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        self.run("bulk_create_product_tags", move |conn| {
            let tx = conn.transaction()?;
            let mut created = Vec::with_capacity(rows.len());
            {
                let mut stmt =
                    tx.prepare("INSERT INTO product_tags (product_id, tag_id) VALUES (?1, ?2)")?;
                for row in rows {
                    stmt.execute(params![row.product_id, row.tag_id])?;
                    created.push(ProductTag {
                        id: tx.last_insert_rowid(),
                        product_id: row.product_id,
                        tag_id: row.tag_id,
                    });
                }
            }
            tx.commit()?;
            Ok(created)
        })
        .await
    }

    async fn delete_product_tags(&self, ids: Vec<i64>) -> StorageResult<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        self.run("delete_product_tags", move |conn| {
            let placeholders = vec!["?"; ids.len()].join(", ");
            let sql = format!("DELETE FROM product_tags WHERE id IN ({placeholders})");
            Ok(conn.execute(&sql, params_from_iter(ids))?)
        })
        .await
    }
}
