//! `/api/products` endpoints
//!
//! Product writes also maintain the product's tag links. Creation links the
//! initial `tagIds`; an update that carries `tagIds` replaces the linked set
//! with exactly those tags, removing and inserting rows concurrently.

use super::present;
use crate::extract::{ApiJson, ApiPath};
use crate::{AppState, Result, WebError};
use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use storefront_core::{
    reconcile_tags, NewProduct, NewProductTag, Product, ProductChanges, ProductDetail, ProductTag,
};
use tracing::debug;

const INVALID_PRODUCT: &str =
    "Please enter a valid product name, price, category ID, and/or stock count";

pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

#[derive(Debug, Deserialize)]
struct CreateProductBody {
    product_name: Option<String>,
    price: Option<f64>,
    stock: Option<i64>,
    category_id: Option<i64>,
    #[serde(rename = "tagIds")]
    tag_ids: Option<Vec<i64>>,
}

impl CreateProductBody {
    fn validate(self) -> Result<(NewProduct, Vec<i64>)> {
        let (Some(product_name), Some(price), Some(stock), Some(category_id)) = (
            present(self.product_name),
            self.price,
            self.stock,
            self.category_id,
        ) else {
            return Err(WebError::Validation(INVALID_PRODUCT.into()));
        };

        let product = NewProduct {
            product_name,
            price,
            stock,
            category_id: Some(category_id),
        };
        Ok((product, self.tag_ids.unwrap_or_default()))
    }
}

#[derive(Debug, Default, Deserialize)]
struct UpdateProductBody {
    product_name: Option<String>,
    price: Option<f64>,
    stock: Option<i64>,
    #[serde(default, deserialize_with = "explicit_null")]
    category_id: Option<Option<i64>>,
    #[serde(rename = "tagIds")]
    tag_ids: Option<Vec<i64>>,
}

/// Keeps an explicit `null` distinct from an absent key
fn explicit_null<'de, D>(deserializer: D) -> std::result::Result<Option<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize)]
struct CreatedProduct {
    #[serde(flatten)]
    product: Product,
    product_tags: Vec<ProductTag>,
}

#[derive(Debug, Serialize)]
struct UpdatedProduct {
    message: &'static str,
    updated: usize,
    tag_ids: Vec<i64>,
    added: Vec<ProductTag>,
    removed: usize,
}

async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<ProductDetail>>> {
    Ok(Json(state.store.list_products().await?))
}

async fn get_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ProductDetail>> {
    state
        .store
        .get_product(id)
        .await?
        .map(Json)
        .ok_or_else(|| WebError::NotFound(format!("Product with ID {id} could not be found")))
}

async fn create_product(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateProductBody>,
) -> Result<Json<CreatedProduct>> {
    let (new_product, tag_ids) = body.validate()?;

    let product = state.store.create_product(new_product).await?;

    let links = tag_ids
        .into_iter()
        .map(|tag_id| NewProductTag {
            product_id: product.id,
            tag_id,
        })
        .collect();
    let product_tags = state.store.bulk_create_product_tags(links).await?;

    Ok(Json(CreatedProduct {
        product,
        product_tags,
    }))
}

async fn update_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<UpdateProductBody>,
) -> Result<Json<UpdatedProduct>> {
    let changes = ProductChanges {
        product_name: body.product_name,
        price: body.price,
        stock: body.stock,
        category_id: body.category_id,
    };

    // An empty change set still reports whether the row exists, so the row
    // count alone gates the tag rewrite.
    let updated = state.store.update_product(id, changes).await?;
    if updated == 0 {
        return Err(WebError::NotFound(format!(
            "Update failed because Product with ID {id} could not be found"
        )));
    }

    let current = state.store.product_tags(id).await?;
    let plan = reconcile_tags(id, &current, body.tag_ids.as_deref());
    let tag_ids = plan.tag_ids().to_vec();
    debug!(
        product_id = id,
        insert = plan.to_insert.len(),
        remove = plan.to_remove.len(),
        "Reconciled product tags"
    );

    let (removed, added) = tokio::try_join!(
        state.store.delete_product_tags(plan.to_remove),
        state.store.bulk_create_product_tags(plan.to_insert),
    )?;

    Ok(Json(UpdatedProduct {
        message: "Successfully updated Product",
        updated,
        tag_ids,
        added,
        removed,
    }))
}

async fn delete_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Value>> {
    let deleted = state.store.delete_product(id).await?;

    if deleted == 0 {
        return Err(WebError::NotFound(format!(
            "Delete failed because Product with ID {id} could not be found"
        )));
    }

    Ok(Json(json!({
        "message": "Product successfully deleted",
        "deleted": deleted
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_every_product_field() {
        let body: CreateProductBody = serde_json::from_value(json!({
            "product_name": "Basketball",
            "price": 200.0,
            "stock": 3
        }))
        .unwrap();
        assert!(matches!(body.validate(), Err(WebError::Validation(_))));

        let body: CreateProductBody = serde_json::from_value(json!({
            "product_name": " ",
            "price": 200.0,
            "stock": 3,
            "category_id": 1
        }))
        .unwrap();
        assert!(body.validate().is_err());
    }

    #[test]
    fn create_defaults_tag_ids_to_empty() {
        let body: CreateProductBody = serde_json::from_value(json!({
            "product_name": "Basketball",
            "price": 200.0,
            "stock": 3,
            "category_id": 1
        }))
        .unwrap();

        let (product, tag_ids) = body.validate().unwrap();
        assert_eq!(product.category_id, Some(1));
        assert!(tag_ids.is_empty());
    }

    #[test]
    fn update_distinguishes_null_from_absent_category() {
        let absent: UpdateProductBody = serde_json::from_value(json!({ "stock": 4 })).unwrap();
        assert_eq!(absent.category_id, None);
        assert_eq!(absent.tag_ids, None);

        let cleared: UpdateProductBody =
            serde_json::from_value(json!({ "category_id": null })).unwrap();
        assert_eq!(cleared.category_id, Some(None));

        let moved: UpdateProductBody =
            serde_json::from_value(json!({ "category_id": 2, "tagIds": [1, 2] })).unwrap();
        assert_eq!(moved.category_id, Some(Some(2)));
        assert_eq!(moved.tag_ids, Some(vec![1, 2]));
    }
}
