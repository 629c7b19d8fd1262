//! Authentication layer and the extractor that reads its result.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use sherlock_core::error::CoreError;
use sherlock_core::types::DbId;

use crate::auth::credentials::Credentials;
use crate::auth::gate;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// The user resolved by [`require_auth`] for the current request.
///
/// Use this as an extractor parameter in any handler behind the auth layer:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id.
    pub user_id: DbId,
    pub username: String,
}

/// Verify the request's credentials and publish the resulting [`AuthUser`].
///
/// Mounted with `axum::middleware::from_fn_with_state` as a route layer.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let credentials = Credentials::from_headers(request.headers())?;
    let user = gate::verify(
        &state.pool,
        &state.config.token,
        &credentials.username_or_token,
        &credentials.password,
    )
    .await?;

    request.extensions_mut().insert(AuthUser {
        user_id: user.id,
        username: user.username,
    });
    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AuthUser>().cloned().ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Authentication required".into()))
        })
    }
}
