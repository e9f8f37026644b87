//! Extractors whose rejections render as [`WebError`]

use crate::WebError;
use axum::extract::{FromRequest, FromRequestParts};

/// JSON body; malformed input becomes a 400 with a `message` body
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(WebError))]
pub struct ApiJson<T>(pub T);

/// Path parameters; an unparseable id becomes a 400
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(WebError))]
pub struct ApiPath<T>(pub T);
