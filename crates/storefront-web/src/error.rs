use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use storefront_core::StorageError;
use thiserror::Error;

const GENERIC_FAILURE: &str = "Something went wrong";

#[derive(Error, Debug)]
pub enum WebError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WebError>;

impl From<JsonRejection> for WebError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for WebError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            WebError::Validation(message) => {
                (StatusCode::BAD_REQUEST, json!({ "message": message }))
            }
            WebError::NotFound(message) => (StatusCode::NOT_FOUND, json!({ "message": message })),
            // Dangling foreign keys come from the request, not the server
            WebError::Storage(err) if err.is_constraint() => {
                tracing::warn!(error = %err, "Rejected write");
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "message": GENERIC_FAILURE, "error": err.to_string() }),
                )
            }
            _ => {
                tracing::error!(error = %self, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": GENERIC_FAILURE, "error": self.to_string() }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
