//! HTTP behaviour of the catalog API against an in-memory SQLite store

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use storefront_sqlite::{SqliteCatalogStore, SqlitePool};
use storefront_web::{build_router, AppState, ServerConfig};
use tower::ServiceExt;

fn app() -> Router {
    let store = SqliteCatalogStore::new(SqlitePool::memory().unwrap());
    build_router(AppState::new(store), &ServerConfig::default()).unwrap()
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create(app: &Router, uri: &str, body: Value) -> Value {
    let (status, value) = send(app, Method::POST, uri, Some(body)).await;
    assert_eq!(status, StatusCode::OK, "create {uri} failed: {value}");
    value
}

/// Category 1 plus tags 1..=3
async fn seed(app: &Router) {
    create(app, "/api/categories", json!({ "category_name": "Sports" })).await;
    for name in ["orange", "blue", "gold"] {
        create(app, "/api/tags", json!({ "tag_name": name })).await;
    }
}

fn tag_ids(product: &Value) -> Vec<i64> {
    let mut ids: Vec<i64> = product["tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tag| tag["id"].as_i64().unwrap())
        .collect();
    ids.sort_unstable();
    ids
}

#[tokio::test]
async fn health_and_ready() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy", "service": "storefront-web" }));

    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn empty_lists_are_ok() {
    let app = app();
    for uri in ["/api/categories", "/api/products", "/api/tags"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }
}

#[tokio::test]
async fn category_lifecycle() {
    let app = app();

    let created = create(&app, "/api/categories", json!({ "category_name": "Shirts" })).await;
    assert_eq!(created, json!({ "id": 1, "category_name": "Shirts" }));

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/categories/1",
        Some(json!({ "category_name": "Tops" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"], 1);

    let (status, body) = send(&app, Method::GET, "/api/categories/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "category_name": "Tops", "products": [] }));

    let (status, body) = send(&app, Method::DELETE, "/api/categories/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], 1);

    let (status, _) = send(&app, Method::GET, "/api/categories/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn category_validation_and_not_found() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/api/categories", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please enter a valid category name");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/categories",
        Some(json!({ "category_name": "  " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::DELETE, "/api/categories/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["message"],
        "Delete failed because Category with ID 42 could not be found"
    );

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/categories/42",
        Some(json!({ "category_name": "Ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_requests_are_bad_requests() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/products/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/tags")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_product_links_initial_tags() {
    let app = app();
    seed(&app).await;

    let created = create(
        &app,
        "/api/products",
        json!({
            "product_name": "Basketball",
            "price": 200.0,
            "stock": 3,
            "category_id": 1,
            "tagIds": [1, 2]
        }),
    )
    .await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["product_name"], "Basketball");
    assert_eq!(created["product_tags"].as_array().unwrap().len(), 2);

    let (status, product) = send(&app, Method::GET, "/api/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["category"]["category_name"], "Sports");
    assert_eq!(tag_ids(&product), vec![1, 2]);

    let (_, tag) = send(&app, Method::GET, "/api/tags/2", None).await;
    assert_eq!(tag["products"][0]["product_name"], "Basketball");
}

#[tokio::test]
async fn create_product_requires_all_fields() {
    let app = app();
    seed(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/products",
        Some(json!({ "product_name": "Basketball", "price": 200.0, "stock": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Please enter a valid product name, price, category ID, and/or stock count"
    );

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/products",
        Some(json!({
            "product_name": "Basketball",
            "price": 200.0,
            "stock": 3,
            "category_id": 99
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_product_replaces_tags() {
    let app = app();
    seed(&app).await;
    create(
        &app,
        "/api/products",
        json!({
            "product_name": "Basketball",
            "price": 200.0,
            "stock": 3,
            "category_id": 1,
            "tagIds": [1, 2]
        }),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/products/1",
        Some(json!({ "tagIds": [2, 3] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully updated Product");
    assert_eq!(body["tag_ids"], json!([2, 3]));
    assert_eq!(body["removed"], 1);
    assert_eq!(body["added"][0]["tag_id"], 3);

    let (_, product) = send(&app, Method::GET, "/api/products/1", None).await;
    assert_eq!(tag_ids(&product), vec![2, 3]);
}

#[tokio::test]
async fn update_without_tag_ids_keeps_links() {
    let app = app();
    seed(&app).await;
    create(
        &app,
        "/api/products",
        json!({
            "product_name": "Basketball",
            "price": 200.0,
            "stock": 3,
            "category_id": 1,
            "tagIds": [1]
        }),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/products/1",
        Some(json!({ "stock": 9, "category_id": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"], 1);
    assert_eq!(body["tag_ids"], json!([1]));
    assert_eq!(body["added"], json!([]));
    assert_eq!(body["removed"], 0);

    let (_, product) = send(&app, Method::GET, "/api/products/1", None).await;
    assert_eq!(product["stock"], 9);
    assert_eq!(product["category_id"], Value::Null);
    assert_eq!(product["category"], Value::Null);
    assert_eq!(tag_ids(&product), vec![1]);
}

#[tokio::test]
async fn update_missing_product_is_not_found() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/products/7",
        Some(json!({ "tagIds": [1] })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["message"],
        "Update failed because Product with ID 7 could not be found"
    );
}

#[tokio::test]
async fn update_after_delete_is_not_found_and_links_nothing() {
    let app = app();
    seed(&app).await;
    let product = create(
        &app,
        "/api/products",
        json!({
            "product_name": "Basketball",
            "price": 200.0,
            "stock": 3,
            "category_id": 1
        }),
    )
    .await;
    let id = product["id"].as_i64().unwrap();

    let (status, _) = send(&app, Method::DELETE, &format!("/api/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/products/{id}"),
        Some(json!({ "stock": 9, "tagIds": [1, 2] })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["message"],
        format!("Update failed because Product with ID {id} could not be found")
    );

    let (_, tag) = send(&app, Method::GET, "/api/tags/1", None).await;
    assert_eq!(tag["products"], json!([]));
}

#[tokio::test]
async fn deleting_category_removes_products_and_links() {
    let app = app();
    seed(&app).await;
    create(
        &app,
        "/api/products",
        json!({
            "product_name": "Basketball",
            "price": 200.0,
            "stock": 3,
            "category_id": 1,
            "tagIds": [1, 3]
        }),
    )
    .await;

    let (status, _) = send(&app, Method::DELETE, "/api/categories/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::GET, "/api/products/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, tags) = send(&app, Method::GET, "/api/tags", None).await;
    for tag in tags.as_array().unwrap() {
        assert_eq!(tag["products"], json!([]));
    }
}

#[tokio::test]
async fn tag_lifecycle() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/api/tags", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please add a tag name");

    let tag = create(&app, "/api/tags", json!({ "tag_name": "rock music" })).await;
    assert_eq!(tag, json!({ "id": 1, "tag_name": "rock music" }));

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/tags/1",
        Some(json!({ "tag_name": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please enter a valid tag name");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/tags/1",
        Some(json!({ "tag_name": "punk" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Tag successfully updated");

    let (status, body) = send(&app, Method::DELETE, "/api/tags/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Tag successfully deleted");

    let (status, body) = send(&app, Method::GET, "/api/tags/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Tag with ID 1 could not be found");
}

#[tokio::test]
async fn delete_product() {
    let app = app();
    seed(&app).await;
    create(
        &app,
        "/api/products",
        json!({
            "product_name": "Basketball",
            "price": 200.0,
            "stock": 3,
            "category_id": 1,
            "tagIds": [2]
        }),
    )
    .await;

    let (status, body) = send(&app, Method::DELETE, "/api/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], 1);

    let (status, _) = send(&app, Method::DELETE, "/api/products/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, tag) = send(&app, Method::GET, "/api/tags/2", None).await;
    assert_eq!(tag["products"], json!([]));
}
