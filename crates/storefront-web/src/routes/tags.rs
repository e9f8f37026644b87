//! `/api/tags` endpoints

use super::present;
use crate::extract::{ApiJson, ApiPath};
use crate::{AppState, Result, WebError};
use axum::{extract::State, routing::get, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use storefront_core::{NewTag, Tag, TagChanges, TagWithProducts};

pub fn tag_routes() -> Router<AppState> {
    Router::new()
        .route("/api/tags", get(list_tags).post(create_tag))
        .route(
            "/api/tags/{id}",
            get(get_tag).put(update_tag).delete(delete_tag),
        )
}

#[derive(Debug, Deserialize)]
struct TagBody {
    tag_name: Option<String>,
}

async fn list_tags(State(state): State<AppState>) -> Result<Json<Vec<TagWithProducts>>> {
    Ok(Json(state.store.list_tags().await?))
}

async fn get_tag(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<TagWithProducts>> {
    state
        .store
        .get_tag(id)
        .await?
        .map(Json)
        .ok_or_else(|| WebError::NotFound(format!("Tag with ID {id} could not be found")))
}

async fn create_tag(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<TagBody>,
) -> Result<Json<Tag>> {
    let tag_name = present(body.tag_name)
        .ok_or_else(|| WebError::Validation("Please add a tag name".into()))?;

    Ok(Json(state.store.create_tag(NewTag { tag_name }).await?))
}

async fn update_tag(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<TagBody>,
) -> Result<Json<Value>> {
    let tag_name = present(body.tag_name)
        .ok_or_else(|| WebError::Validation("Please enter a valid tag name".into()))?;

    let updated = state
        .store
        .update_tag(
            id,
            TagChanges {
                tag_name: Some(tag_name),
            },
        )
        .await?;

    if updated == 0 {
        return Err(WebError::NotFound(format!(
            "Update failed because Tag with ID {id} could not be found"
        )));
    }

    Ok(Json(json!({
        "message": "Tag successfully updated",
        "updated": updated
    })))
}

async fn delete_tag(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Value>> {
    let deleted = state.store.delete_tag(id).await?;

    if deleted == 0 {
        return Err(WebError::NotFound(format!(
            "Delete failed because Tag with ID {id} could not be found"
        )));
    }

    Ok(Json(json!({
        "message": "Tag successfully deleted",
        "deleted": deleted
    })))
}
