//! Handlers for the `/user` resource: the caller's own account.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use sherlock_core::error::CoreError;
use sherlock_core::types::DbId;
use sherlock_core::validation::require_non_blank;
use sherlock_db::repositories::UserRepo;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub id: DbId,
    pub username: String,
}

/// Body for `POST /user/change_password`.
///
/// The current password is always required, even when the request was
/// authenticated with a token.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

/// GET /user/me
pub async fn me(user: AuthUser) -> Json<CurrentUserResponse> {
    Json(CurrentUserResponse {
        id: user.user_id,
        username: user.username,
    })
}

/// POST /user/change_password
pub async fn change_password(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(input): AppJson<ChangePasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    let current = require_non_blank(input.current_password.as_deref(), "current_password")?;
    let new_password = require_non_blank(input.new_password.as_deref(), "new_password")?;

    let stored = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| CoreError::Unauthorized("Invalid credentials".into()))?;

    // An unreadable stored hash is treated like a mismatch.
    if !verify_password(current, &stored.password_hash).unwrap_or(false) {
        tracing::debug!(user_id = user.user_id, "Password change with wrong current password");
        return Err(CoreError::Validation("current_password is incorrect".into()).into());
    }

    let password_hash = hash_password(new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    UserRepo::update_password(&state.pool, user.user_id, &password_hash).await?;

    tracing::info!(user_id = user.user_id, username = %user.username, "Password changed");

    Ok(Json(MessageResponse::new("PASSWORD_CHANGED")))
}
