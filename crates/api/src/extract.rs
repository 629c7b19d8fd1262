//! Body extractors whose rejections use the API's JSON error shape.
//!
//! Use [`AppJson`] and [`AppForm`] instead of `axum::Json` / `axum::Form` in
//! handlers: a malformed body becomes `400 {"message": "BAD_REQUEST"}`
//! rather than axum's plain-text rejection.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `application/x-www-form-urlencoded` request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Form), rejection(AppError))]
pub struct AppForm<T>(pub T);
