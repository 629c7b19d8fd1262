//! One-off startup tasks.

use sherlock_db::models::user::CreateUser;
use sherlock_db::repositories::UserRepo;
use sherlock_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::AdminSeed;
use crate::error::{AppError, AppResult};

/// Create the seed administrator unless a user with that name already exists.
///
/// Returns `true` when a new account was created. An existing account is left
/// untouched, including its password.
pub async fn ensure_admin(pool: &DbPool, seed: &AdminSeed) -> AppResult<bool> {
    if UserRepo::find_by_username(pool, &seed.username)
        .await?
        .is_some()
    {
        return Ok(false);
    }

    let password_hash = hash_password(&seed.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: seed.username.clone(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "Seeded admin user");
    Ok(true)
}
