//! Persistence gateway abstractions
//!
//! Business logic depends on these traits; `storefront-sqlite` provides the
//! implementation.

pub mod catalog_traits;
pub mod error;

pub use catalog_traits::{
    CatalogStore, CategoryStorage, ProductStorage, ProductTagStorage, TagStorage,
};
pub use error::{StorageError, StorageResult};
