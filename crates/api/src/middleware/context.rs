//! Per-request ownership context (project -> scenario -> case, project -> cycle).
//!
//! [`resolve_context`] reads the matched path parameters once and loads the
//! entities they name, so handlers never run against a missing parent.
//! Handlers then take [`ProjectContext`], [`ScenarioContext`],
//! [`CaseContext`] or [`CycleContext`] as extractors.

use axum::extract::{FromRequestParts, RawPathParams, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use sherlock_core::error::CoreError;
use sherlock_core::types::DbId;
use sherlock_db::models::case::Case;
use sherlock_db::models::cycle::Cycle;
use sherlock_db::models::project::Project;
use sherlock_db::models::scenario::Scenario;
use sherlock_db::repositories::{CaseRepo, CycleRepo, ProjectRepo, ScenarioRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Project named by `{project_id}`.
#[derive(Debug, Clone)]
pub struct ProjectContext(pub Project);

/// Scenario named by `{scenario_id}`.
#[derive(Debug, Clone)]
pub struct ScenarioContext(pub Scenario);

/// Case named by `{case_id}`, guaranteed to belong to the resolved scenario.
#[derive(Debug, Clone)]
pub struct CaseContext(pub Case);

/// Cycle named by `{cycle_id}`, guaranteed to belong to the resolved project.
#[derive(Debug, Clone)]
pub struct CycleContext(pub Cycle);

/// Identifiers picked out of the matched path.
#[derive(Debug, Default, PartialEq, Eq)]
struct PathIds {
    project_id: Option<DbId>,
    scenario_id: Option<DbId>,
    cycle_id: Option<DbId>,
    case_id: Option<DbId>,
}

impl PathIds {
    /// Collect the known id parameters. A non-numeric id does not name any
    /// endpoint, mirroring integer-only route segments.
    fn from_params<'a, I>(params: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut ids = PathIds::default();
        for (key, value) in params {
            let slot = match key {
                "project_id" => &mut ids.project_id,
                "scenario_id" => &mut ids.scenario_id,
                "cycle_id" => &mut ids.cycle_id,
                "case_id" => &mut ids.case_id,
                _ => continue,
            };
            *slot = Some(value.parse().map_err(|_| AppError::EndpointNotFound)?);
        }
        Ok(ids)
    }
}

/// Load the entities named by the path and publish them as extensions.
///
/// - missing project  -> 400 `PROJECT_NOT_FOUND`
/// - missing scenario, or a scenario of another project -> 404 `NOT_FOUND`
/// - missing cycle, or a cycle of another project -> 404 `NOT_FOUND`
/// - missing case, or a case of another scenario -> 404 `NOT_FOUND`
pub async fn resolve_context(
    State(state): State<AppState>,
    params: RawPathParams,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let ids = PathIds::from_params(params.iter())?;
    let mut project_id = None;

    if let Some(id) = ids.project_id {
        let project = ProjectRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(CoreError::ProjectNotFound(id))?;
        project_id = Some(project.id);

        if let Some(cycle_id) = ids.cycle_id {
            let cycle = CycleRepo::find_in_project(&state.pool, cycle_id, project.id)
                .await?
                .ok_or(CoreError::NotFound {
                    entity: "Cycle",
                    id: cycle_id,
                })?;
            request.extensions_mut().insert(CycleContext(cycle));
        }

        request.extensions_mut().insert(ProjectContext(project));
    }

    if let Some(scenario_id) = ids.scenario_id {
        let scenario = ScenarioRepo::find_by_id(&state.pool, scenario_id)
            .await?
            .filter(|s| project_id.map_or(true, |pid| s.project_id == pid))
            .ok_or(CoreError::NotFound {
                entity: "Scenario",
                id: scenario_id,
            })?;

        if let Some(case_id) = ids.case_id {
            let case = CaseRepo::find_in_scenario(&state.pool, case_id, scenario.id)
                .await?
                .ok_or(CoreError::NotFound {
                    entity: "Case",
                    id: case_id,
                })?;
            request.extensions_mut().insert(CaseContext(case));
        }

        request.extensions_mut().insert(ScenarioContext(scenario));
    }

    Ok(next.run(request).await)
}

/// Implement an extractor that clones a context value out of the request
/// extensions, failing with an internal error if the resolver did not run.
macro_rules! context_extractor {
    ($ty:ty, $what:literal) => {
        impl<S> FromRequestParts<S> for $ty
        where
            S: Send + Sync,
        {
            type Rejection = AppError;

            async fn from_request_parts(
                parts: &mut Parts,
                _state: &S,
            ) -> Result<Self, Self::Rejection> {
                parts.extensions.get::<$ty>().cloned().ok_or_else(|| {
                    AppError::Core(CoreError::Internal(concat!($what, " context not resolved").into()))
                })
            }
        }
    };
}

context_extractor!(ProjectContext, "project");
context_extractor!(ScenarioContext, "scenario");
context_extractor!(CaseContext, "case");
context_extractor!(CycleContext, "cycle");
