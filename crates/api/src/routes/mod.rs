pub mod case;
pub mod health;
pub mod project;
pub mod user;

use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::middleware::auth::require_auth;
use crate::middleware::context::resolve_context;
use crate::state::AppState;

/// Build the authenticated route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth_token                                                   issue token
///
/// /user/me                                                      current user
/// /user/change_password                                         change password (POST)
///
/// /project/list                                                 list projects
/// /project/show/{project_id}                                    show project
/// /project/show_cycle_details/{project_id}                      last cycle stats
/// /project/new                                                  create (POST)
/// /project/edit/{project_id}                                    edit (POST)
///
/// /project/{project_id}/scenario/get_cases_for_scenario/{scenario_id}
/// /project/{project_id}/scenario/new                            form (GET), create (POST)
/// /project/{project_id}/scenario/edit                           scenarios to edit (GET)
/// /project/{project_id}/scenario/edit/{scenario_id}             rename (POST)
///
/// /project/{project_id}/cycle/new                               start cycle (POST)
/// /project/{project_id}/cycle/{cycle_id}                        cycle detail
/// /project/{project_id}/cycle/{cycle_id}/history                record outcome (POST)
///
/// /scenario/{scenario_id}/tst_case/list                         list cases
/// /scenario/{scenario_id}/tst_case/new                          add case (POST)
/// /scenario/{scenario_id}/tst_case/edit/{case_id}               rename case (POST)
/// ```
///
/// Every route runs [`require_auth`] and then [`resolve_context`] before its
/// handler. Layers added later wrap earlier ones, so the auth layer is added
/// last to run first.
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/auth_token", get(handlers::auth::get_auth_token))
        .nest("/user", user::router())
        .nest("/project", project::router())
        .nest("/scenario/{scenario_id}/tst_case", case::router())
        .route_layer(from_fn_with_state(state.clone(), resolve_context))
        .route_layer(from_fn_with_state(state, require_auth))
}
