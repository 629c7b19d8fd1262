//! Credential verification against the user store.

use sherlock_core::error::CoreError;
use sherlock_db::models::user::User;
use sherlock_db::repositories::UserRepo;
use sherlock_db::DbPool;

use crate::auth::password::verify_password;
use crate::auth::token::{validate_token, TokenConfig};
use crate::error::{AppError, AppResult};

/// Message for every credential failure; callers cannot tell which part was wrong.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Resolve a username-or-token plus password to a stored user.
///
/// 1. If `username_or_token` is a valid, unexpired token, the user it names
///    is returned and `password` is ignored.
/// 2. Otherwise it is treated as a username and `password` must match the
///    stored hash.
pub async fn verify(
    pool: &DbPool,
    config: &TokenConfig,
    username_or_token: &str,
    password: &str,
) -> AppResult<User> {
    if let Ok(claims) = validate_token(username_or_token, config) {
        return UserRepo::find_by_id(pool, claims.sub)
            .await?
            .ok_or_else(|| {
                tracing::debug!(user_id = claims.sub, "Token names a missing user");
                unauthorized()
            });
    }

    let user = UserRepo::find_by_username(pool, username_or_token)
        .await?
        .ok_or_else(|| {
            tracing::debug!("Login attempt for unknown username");
            unauthorized()
        })?;

    match verify_password(password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            tracing::debug!(user_id = user.id, "Password mismatch");
            return Err(unauthorized());
        }
        Err(e) => {
            tracing::warn!(user_id = user.id, error = %e, "Stored password hash is unusable");
            return Err(unauthorized());
        }
    }

    Ok(user)
}

fn unauthorized() -> AppError {
    AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()))
}
