//! Domain types shared by the storage backends and the web layer

pub mod catalog;
pub mod input;

pub use catalog::{
    Category, CategoryWithProducts, Product, ProductDetail, ProductTag, Tag, TagWithProducts,
};
pub use input::{
    CategoryChanges, NewCategory, NewProduct, NewProductTag, NewTag, ProductChanges, TagChanges,
};
