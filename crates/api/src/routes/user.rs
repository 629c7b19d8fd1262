//! Route definitions for `/user`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(user::me))
        .route("/change_password", post(user::change_password))
}
