//! Catalog records as they are stored and served

use serde::{Deserialize, Serialize};

/// A product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub category_name: String,
}

/// A product row without its relations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub product_name: String,
    pub price: f64,
    pub stock: i64,
    pub category_id: Option<i64>,
}

/// A tag that can be attached to any number of products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub tag_name: String,
}

/// One product-tag association (join row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductTag {
    pub id: i64,
    pub product_id: i64,
    pub tag_id: i64,
}

/// Category with the products it owns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryWithProducts {
    #[serde(flatten)]
    pub category: Category,
    pub products: Vec<Product>,
}

/// Product with its owning category and attached tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    pub category: Option<Category>,
    pub tags: Vec<Tag>,
}

impl ProductDetail {
    /// Ids of the attached tags, in the order they were loaded
    pub fn tag_ids(&self) -> Vec<i64> {
        self.tags.iter().map(|tag| tag.id).collect()
    }
}

/// Tag with every product it is attached to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagWithProducts {
    #[serde(flatten)]
    pub tag: Tag,
    pub products: Vec<Product>,
}
