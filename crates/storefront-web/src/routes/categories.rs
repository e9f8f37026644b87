//! `/api/categories` endpoints

use super::present;
use crate::extract::{ApiJson, ApiPath};
use crate::{AppState, Result, WebError};
use axum::{extract::State, routing::get, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use storefront_core::{Category, CategoryChanges, CategoryWithProducts, NewCategory};

const MISSING_NAME: &str = "Please enter a valid category name";

pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/categories",
            get(list_categories).post(create_category),
        )
        .route(
            "/api/categories/{id}",
            get(get_category).put(update_category).delete(delete_category),
        )
}

#[derive(Debug, Deserialize)]
struct CategoryBody {
    category_name: Option<String>,
}

async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<CategoryWithProducts>>> {
    Ok(Json(state.store.list_categories().await?))
}

async fn get_category(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<CategoryWithProducts>> {
    state
        .store
        .get_category(id)
        .await?
        .map(Json)
        .ok_or_else(|| WebError::NotFound(format!("No category found with ID {id}")))
}

async fn create_category(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CategoryBody>,
) -> Result<Json<Category>> {
    let category_name =
        present(body.category_name).ok_or_else(|| WebError::Validation(MISSING_NAME.into()))?;

    let category = state
        .store
        .create_category(NewCategory { category_name })
        .await?;
    Ok(Json(category))
}

async fn update_category(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<CategoryBody>,
) -> Result<Json<Value>> {
    let category_name =
        present(body.category_name).ok_or_else(|| WebError::Validation(MISSING_NAME.into()))?;

    let updated = state
        .store
        .update_category(
            id,
            CategoryChanges {
                category_name: Some(category_name),
            },
        )
        .await?;

    if updated == 0 {
        return Err(WebError::NotFound(format!(
            "Update failed because Category with ID {id} could not be found"
        )));
    }

    Ok(Json(json!({
        "message": "Category successfully updated",
        "updated": updated
    })))
}

async fn delete_category(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Value>> {
    let deleted = state.store.delete_category(id).await?;

    if deleted == 0 {
        return Err(WebError::NotFound(format!(
            "Delete failed because Category with ID {id} could not be found"
        )));
    }

    Ok(Json(json!({
        "message": "Category successfully deleted",
        "deleted": deleted
    })))
}
