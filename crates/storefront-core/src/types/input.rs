//! Write-side inputs handed to the storage layer
//!
//! These types have already passed request validation: required fields are
//! present. Change sets use `None` for "leave the column alone".

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCategory {
    pub category_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryChanges {
    pub category_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub product_name: String,
    pub price: f64,
    pub stock: i64,
    pub category_id: Option<i64>,
}

/// Partial product update
///
/// `category_id` is doubly optional: `None` keeps the current category,
/// `Some(None)` detaches the product from any category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductChanges {
    pub product_name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub category_id: Option<Option<i64>>,
}

impl ProductChanges {
    /// True when no column would be touched
    pub fn is_empty(&self) -> bool {
        self.product_name.is_none()
            && self.price.is_none()
            && self.stock.is_none()
            && self.category_id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTag {
    pub tag_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagChanges {
    pub tag_name: Option<String>,
}

/// Association row waiting to be inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NewProductTag {
    pub product_id: i64,
    pub tag_id: i64,
}
