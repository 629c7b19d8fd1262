//! Route definitions for `/scenario/{scenario_id}/tst_case`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::case;
use crate::state::AppState;

/// ```text
/// GET  /list              -> list
/// POST /new               -> create
/// POST /edit/{case_id}    -> edit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list", get(case::list))
        .route("/new", post(case::create))
        .route("/edit/{case_id}", post(case::edit))
}
