//! TagStorage implementation for SQLite

use super::{group_by_key, product_from_row, tag_from_row, SqliteCatalogStore, PRODUCT_COLUMNS};
use async_trait::async_trait;
use rusqlite::{params, OptionalExtension};
use storefront_core::storage::{StorageResult, TagStorage};
use storefront_core::types::{NewTag, Tag, TagChanges, TagWithProducts};
use tracing::info;

#[async_trait]
impl TagStorage for SqliteCatalogStore {
    async fn list_tags(&self) -> StorageResult<Vec<TagWithProducts>> {
        self.run("list_tags", |conn| {
            let mut products = group_by_key(
                conn,
                &format!(
                    "SELECT pt.tag_id, {PRODUCT_COLUMNS}
                     FROM product_tags pt
                     JOIN products p ON p.id = pt.product_id
                     ORDER BY pt.id"
                ),
                [],
                product_from_row,
            )?;

            let mut stmt = conn.prepare("SELECT id, tag_name FROM tags ORDER BY id")?;
            let tags = stmt
                .query_map([], |row| tag_from_row(row, 0))?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            Ok(tags
                .into_iter()
                .map(|tag| TagWithProducts {
                    products: products.remove(&tag.id).unwrap_or_default(),
                    tag,
                })
                .collect())
        })
        .await
    }

    async fn get_tag(&self, id: i64) -> StorageResult<Option<TagWithProducts>> {
        self.run("get_tag", move |conn| {
            let tag = conn
                .query_row("SELECT id, tag_name FROM tags WHERE id = ?1", [id], |row| {
                    tag_from_row(row, 0)
                })
                .optional()?;

            let Some(tag) = tag else {
                return Ok(None);
            };

            let mut stmt = conn.prepare(&format!(
                "SELECT {PRODUCT_COLUMNS}
                 FROM product_tags pt
                 JOIN products p ON p.id = pt.product_id
                 WHERE pt.tag_id = ?1
                 ORDER BY pt.id"
            ))?;
            let products = stmt
                .query_map([id], |row| product_from_row(row, 0))?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            Ok(Some(TagWithProducts { tag, products }))
        })
        .await
    }

    async fn create_tag(&self, tag: NewTag) -> StorageResult<Tag> {
        self.run("create_tag", move |conn| {
            conn.execute("INSERT INTO tags (tag_name) VALUES (?1)", [&tag.tag_name])?;

            Ok(Tag {
                id: conn.last_insert_rowid(),
                tag_name: tag.tag_name,
            })
        })
        .await
    }

    async fn update_tag(&self, id: i64, changes: TagChanges) -> StorageResult<usize> {
        self.run("update_tag", move |conn| {
            let matched = match changes.tag_name {
                Some(name) => conn.execute(
                    "UPDATE tags SET tag_name = ?1 WHERE id = ?2",
                    params![name, id],
                )?,
                None => conn.query_row("SELECT COUNT(*) FROM tags WHERE id = ?1", [id], |row| {
                    row.get::<_, i64>(0)
                })? as usize,
            };
            Ok(matched)
        })
        .await
    }

    async fn delete_tag(&self, id: i64) -> StorageResult<usize> {
        self.run("delete_tag", move |conn| {
            let tx = conn.transaction()?;

            let links = tx.execute("DELETE FROM product_tags WHERE tag_id = ?1", [id])?;
            let deleted = tx.execute("DELETE FROM tags WHERE id = ?1", [id])?;

            tx.commit()?;

            if deleted > 0 {
                info!(tag_id = id, links, "Deleted tag");
            }
            Ok(deleted)
        })
        .await
    }
}
