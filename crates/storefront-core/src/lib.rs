//! Core domain for the storefront catalog service
//!
//! Holds the catalog types, the storage traits every backend implements, and
//! the tag reconciliation used when a product's tags are replaced.

pub mod reconcile;
pub mod storage;
pub mod types;

pub use reconcile::{reconcile_tags, TagReconciliation};
pub use storage::{
    CatalogStore, CategoryStorage, ProductStorage, ProductTagStorage, StorageError,
    StorageResult, TagStorage,
};
pub use types::{
    Category, CategoryChanges, CategoryWithProducts, NewCategory, NewProduct, NewProductTag,
    NewTag, Product, ProductChanges, ProductDetail, ProductTag, Tag, TagChanges,
    TagWithProducts,
};
