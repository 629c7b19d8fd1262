//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is involved.

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use sherlock_api::error::AppError;
use sherlock_core::error::CoreError;

/// Convert an `AppError` into its status, `WWW-Authenticate` header, and JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, Option<String>, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let challenge = response
        .headers()
        .get(header::WWW_AUTHENTICATE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, challenge, json)
}

#[tokio::test]
async fn project_not_found_is_a_400() {
    let (status, challenge, json) =
        error_to_response(AppError::Core(CoreError::ProjectNotFound(9))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(challenge.is_none());
    assert_eq!(json["message"], "PROJECT_NOT_FOUND");
    assert_eq!(json["error"], "Project with id 9 not found");
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Scenario",
        id: 42,
    });

    let (status, _, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "NOT_FOUND");
    assert_eq!(json["error"], "Scenario with id 42 not found");
}

#[tokio::test]
async fn validation_error_returns_400_with_detail() {
    let err = AppError::Core(CoreError::Validation("project_name is required".into()));

    let (status, _, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "project_name is required");
}

#[tokio::test]
async fn unauthorized_carries_basic_challenge() {
    let err = AppError::Core(CoreError::Unauthorized("Invalid credentials".into()));

    let (status, challenge, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        challenge.as_deref(),
        Some("Basic realm=\"Authentication Required\"")
    );
    assert_eq!(json["message"], "UNAUTHORIZED");
}

#[tokio::test]
async fn unknown_endpoint_returns_404() {
    let (status, _, json) = error_to_response(AppError::EndpointNotFound).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "ENDPOINT_NOTFOUND");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let (status, _, json) =
        error_to_response(AppError::BadRequest("invalid field value".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("secret database credentials leaked".into());

    let (status, _, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn row_not_found_maps_to_404() {
    let (status, _, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "NOT_FOUND");
}

#[tokio::test]
async fn method_not_allowed_returns_405() {
    let (status, _, json) = error_to_response(AppError::MethodNotAllowed).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["message"], "METHOD_NOT_ALLOWED");
}
