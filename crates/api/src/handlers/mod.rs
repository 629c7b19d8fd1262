pub mod auth;
pub mod case;
pub mod cycle;
pub mod project;
pub mod scenario;
pub mod user;

use crate::error::AppError;

/// Fallback for unmatched routes: 404 `ENDPOINT_NOTFOUND`.
pub async fn endpoint_not_found() -> AppError {
    AppError::EndpointNotFound
}

/// Fallback for a known path hit with an unsupported method: 405 `METHOD_NOT_ALLOWED`.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
