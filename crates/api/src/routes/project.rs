//! Route definitions for the `/project` resource.
//!
//! Also nests scenario and cycle routes under `/project/{project_id}/...`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{cycle, project, scenario};
use crate::state::AppState;

/// Routes mounted at `/project`.
///
/// ```text
/// GET  /list                                              -> list
/// GET  /show/{project_id}                                 -> show
/// GET  /show_cycle_details/{project_id}                   -> show_last_cycle_stats
/// POST /new                                               -> create
/// POST /edit/{project_id}                                 -> edit
///
/// GET  /{project_id}/scenario/get_cases_for_scenario/{scenario_id} -> list_cases
/// GET  /{project_id}/scenario/new                         -> new_form
/// POST /{project_id}/scenario/new                         -> create
/// GET  /{project_id}/scenario/edit                        -> list_for_edit
/// POST /{project_id}/scenario/edit/{scenario_id}          -> edit
///
/// POST /{project_id}/cycle/new                            -> create
/// GET  /{project_id}/cycle/{cycle_id}                     -> show
/// POST /{project_id}/cycle/{cycle_id}/history             -> record_outcome
/// ```
pub fn router() -> Router<AppState> {
    let scenario_routes = Router::new()
        .route(
            "/get_cases_for_scenario/{scenario_id}",
            get(scenario::list_cases),
        )
        .route("/new", get(scenario::new_form).post(scenario::create))
        .route("/edit", get(scenario::list_for_edit))
        .route("/edit/{scenario_id}", post(scenario::edit));

    let cycle_routes = Router::new()
        .route("/new", post(cycle::create))
        .route("/{cycle_id}", get(cycle::show))
        .route("/{cycle_id}/history", post(cycle::record_outcome));

    Router::new()
        .route("/list", get(project::list))
        .route("/show/{project_id}", get(project::show))
        .route(
            "/show_cycle_details/{project_id}",
            get(project::show_last_cycle_stats),
        )
        .route("/new", post(project::create))
        .route("/edit/{project_id}", post(project::edit))
        .nest("/{project_id}/scenario", scenario_routes)
        .nest("/{project_id}/cycle", cycle_routes)
}
