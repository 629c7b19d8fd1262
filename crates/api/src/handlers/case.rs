//! Handlers for the `/scenario/{scenario_id}/tst_case` resource.
//!
//! Cases of an existing scenario can be listed, appended and renamed here;
//! the scenario's project is taken from the scenario row itself.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use sherlock_core::error::CoreError;
use sherlock_core::validation::require_non_blank;
use sherlock_db::models::case::CreateCase;
use sherlock_db::repositories::CaseRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::middleware::context::{CaseContext, ScenarioContext};
use crate::response::{CaseResponse, MessageResponse};
use crate::state::AppState;

/// Body for `new` and `edit`.
#[derive(Debug, Deserialize)]
pub struct CaseFields {
    pub case_name: Option<String>,
}

/// GET /scenario/{scenario_id}/tst_case/list
pub async fn list(
    State(state): State<AppState>,
    ScenarioContext(scenario): ScenarioContext,
) -> AppResult<Json<Vec<CaseResponse>>> {
    let cases = CaseRepo::list_by_scenario(&state.pool, scenario.id).await?;
    Ok(Json(cases.iter().map(CaseResponse::from).collect()))
}

/// POST /scenario/{scenario_id}/tst_case/new
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    ScenarioContext(scenario): ScenarioContext,
    AppJson(input): AppJson<CaseFields>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let name = require_non_blank(input.case_name.as_deref(), "case_name")?;

    let case = CaseRepo::create(
        &state.pool,
        &CreateCase {
            scenario_id: scenario.id,
            name: name.to_string(),
        },
    )
    .await?;

    tracing::info!(
        scenario_id = scenario.id,
        case_id = case.id,
        created_by = %user.username,
        "Case added"
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_id("CASE_CREATED", case.id)),
    ))
}

/// POST /scenario/{scenario_id}/tst_case/edit/{case_id}
pub async fn edit(
    State(state): State<AppState>,
    CaseContext(case): CaseContext,
    AppJson(input): AppJson<CaseFields>,
) -> AppResult<Json<MessageResponse>> {
    let name = require_non_blank(input.case_name.as_deref(), "case_name")?;

    let case = CaseRepo::rename(&state.pool, case.id, name)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Case",
            id: case.id,
        })?;

    tracing::info!(case_id = case.id, "Case renamed");

    Ok(Json(MessageResponse::with_id("CASE_EDITED", case.id)))
}
