//! Handler for `GET /auth_token`.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::auth::token::issue_token;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// A freshly issued token and its lifetime in seconds.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub duration: i64,
}

/// GET /auth_token
///
/// Exchange valid credentials for a time-limited token that can be sent in
/// place of the username on later requests.
pub async fn get_auth_token(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<TokenResponse>> {
    let ttl_secs = state.config.token.ttl_secs;
    let token = issue_token(user.user_id, ttl_secs, &state.config.token)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::debug!(user_id = user.user_id, ttl_secs, "Issued auth token");

    Ok(Json(TokenResponse {
        token,
        duration: ttl_secs,
    }))
}
