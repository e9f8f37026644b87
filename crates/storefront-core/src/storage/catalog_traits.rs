//! Catalog Storage Traits
//!
//! The persistence gateway is split into one trait per table family, the way
//! a handler actually consumes it:
//!
//! - **CategoryStorage**: categories with their products
//! - **ProductStorage**: products with their category and tags
//! - **TagStorage**: tags with their products
//! - **ProductTagStorage**: bulk maintenance of product-tag join rows
//!
//! `CatalogStore` bundles all four so the web layer can hold a single
//! `Arc<dyn CatalogStore>`.
//!
//! Update and delete operations return the number of rows they matched.
//! A count of zero is how callers learn that the target id does not exist.
//! Deletes remove dependent rows first (join rows, then owned products);
//! the backend performs that cascade explicitly.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use storefront_core::storage::{ProductStorage, StorageResult};
//!
//! async fn stock_of<S: ProductStorage>(storage: &S, id: i64) -> StorageResult<Option<i64>> {
//!     Ok(storage.find_product(id).await?.map(|p| p.stock))
//! }
//! ```

use crate::storage::StorageResult;
use crate::types::{
    Category, CategoryChanges, CategoryWithProducts, NewCategory, NewProduct, NewProductTag,
    NewTag, Product, ProductChanges, ProductDetail, ProductTag, Tag, TagChanges, TagWithProducts,
};
use async_trait::async_trait;

#[async_trait]
pub trait CategoryStorage: Send + Sync {
    /// All categories, each with its products
    async fn list_categories(&self) -> StorageResult<Vec<CategoryWithProducts>>;

    async fn get_category(&self, id: i64) -> StorageResult<Option<CategoryWithProducts>>;

    async fn create_category(&self, category: NewCategory) -> StorageResult<Category>;

    async fn update_category(&self, id: i64, changes: CategoryChanges) -> StorageResult<usize>;

    /// Delete a category together with its products and their tag links
    async fn delete_category(&self, id: i64) -> StorageResult<usize>;
}

#[async_trait]
pub trait ProductStorage: Send + Sync {
    /// All products, each with its category and tags
    async fn list_products(&self) -> StorageResult<Vec<ProductDetail>>;

    async fn get_product(&self, id: i64) -> StorageResult<Option<ProductDetail>>;

    /// Plain row lookup without relations
    async fn find_product(&self, id: i64) -> StorageResult<Option<Product>>;

    async fn create_product(&self, product: NewProduct) -> StorageResult<Product>;

    /// Apply a partial update. An empty change set writes nothing and reports
    /// whether the row exists.
    async fn update_product(&self, id: i64, changes: ProductChanges) -> StorageResult<usize>;

    /// Delete a product together with its tag links
    async fn delete_product(&self, id: i64) -> StorageResult<usize>;
}

#[async_trait]
pub trait TagStorage: Send + Sync {
    /// All tags, each with the products carrying it
    async fn list_tags(&self) -> StorageResult<Vec<TagWithProducts>>;

    async fn get_tag(&self, id: i64) -> StorageResult<Option<TagWithProducts>>;

    async fn create_tag(&self, tag: NewTag) -> StorageResult<Tag>;

    async fn update_tag(&self, id: i64, changes: TagChanges) -> StorageResult<usize>;

    /// Delete a tag together with its product links
    async fn delete_tag(&self, id: i64) -> StorageResult<usize>;
}

#[async_trait]
pub trait ProductTagStorage: Send + Sync {
    /// Current associations of one product, ordered by association id
    async fn product_tags(&self, product_id: i64) -> StorageResult<Vec<ProductTag>>;

    /// Insert association rows in order, returning them with their new ids.
    /// Duplicate `(product_id, tag_id)` pairs are inserted as separate rows.
    async fn bulk_create_product_tags(
        &self,
        rows: Vec<NewProductTag>,
    ) -> StorageResult<Vec<ProductTag>>;

    /// Delete association rows by id, returning how many were removed
    async fn delete_product_tags(&self, ids: Vec<i64>) -> StorageResult<usize>;
}

/// Everything the HTTP layer needs from persistence
#[async_trait]
pub trait CatalogStore: CategoryStorage + ProductStorage + TagStorage + ProductTagStorage {
    /// Cheap round-trip used by readiness checks
    async fn ping(&self) -> StorageResult<()>;
}
