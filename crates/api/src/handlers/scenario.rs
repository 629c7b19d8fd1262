//! Handlers for the `/project/{project_id}/scenario` resource.
//!
//! New scenarios arrive as url-encoded form submissions carrying the scenario
//! name and its first cases; see [`sherlock_core::scenario_form`].

use std::collections::HashMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use sherlock_core::error::CoreError;
use sherlock_core::scenario_form::{
    indexed_case_field, parse_scenario_form, FIELD_FIRST_CASE, FIELD_SCENARIO,
};
use sherlock_core::types::DbId;
use sherlock_core::validation::require_non_blank;
use sherlock_db::models::scenario::CreateScenarioWithCases;
use sherlock_db::repositories::{CaseRepo, ScenarioRepo};

use crate::error::AppResult;
use crate::extract::{AppForm, AppJson};
use crate::middleware::context::{ProjectContext, ScenarioContext};
use crate::response::{CaseResponse, ScenarioResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Field layout a client should submit to `POST .../scenario/new`.
#[derive(Debug, Serialize)]
pub struct ScenarioFormDescriptor {
    pub project_id: DbId,
    pub fields: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ScenarioCreatedResponse {
    pub message: &'static str,
    pub scenario_id: DbId,
    pub case_ids: Vec<DbId>,
}

/// Request body for `POST .../scenario/edit/{scenario_id}`.
#[derive(Debug, Deserialize)]
pub struct EditScenarioRequest {
    pub scenario_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScenarioEditedResponse {
    pub status: &'static str,
    pub scenario_id: DbId,
    pub scenario_name: String,
}

/// Scenarios available for editing, or an explicit marker when there are none.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum EditableScenarios {
    Scenarios { scenarios: Vec<ScenarioResponse> },
    NothingToEdit { message: &'static str },
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /project/{project_id}/scenario/get_cases_for_scenario/{scenario_id}
pub async fn list_cases(
    State(state): State<AppState>,
    ScenarioContext(scenario): ScenarioContext,
) -> AppResult<Json<Vec<CaseResponse>>> {
    let cases = CaseRepo::list_by_scenario(&state.pool, scenario.id).await?;
    Ok(Json(cases.iter().map(CaseResponse::from).collect()))
}

/// GET /project/{project_id}/scenario/new
pub async fn new_form(ProjectContext(project): ProjectContext) -> Json<ScenarioFormDescriptor> {
    Json(ScenarioFormDescriptor {
        project_id: project.id,
        fields: vec![
            FIELD_SCENARIO.to_string(),
            FIELD_FIRST_CASE.to_string(),
            indexed_case_field(0),
        ],
    })
}

/// POST /project/{project_id}/scenario/new
///
/// Creates one scenario and all of its cases in a single transaction.
pub async fn create(
    State(state): State<AppState>,
    ProjectContext(project): ProjectContext,
    AppForm(fields): AppForm<HashMap<String, String>>,
) -> AppResult<(StatusCode, Json<ScenarioCreatedResponse>)> {
    let form = parse_scenario_form(&fields)?;

    let input = CreateScenarioWithCases {
        project_id: project.id,
        name: form.scenario_name,
        case_names: form.case_names,
    };
    let (scenario, cases) = ScenarioRepo::create_with_cases(&state.pool, &input).await?;

    tracing::info!(
        project_id = project.id,
        scenario_id = scenario.id,
        case_count = cases.len(),
        "Scenario and cases created"
    );

    Ok((
        StatusCode::CREATED,
        Json(ScenarioCreatedResponse {
            message: "SCENARIO_CREATED",
            scenario_id: scenario.id,
            case_ids: cases.iter().map(|c| c.id).collect(),
        }),
    ))
}

/// POST /project/{project_id}/scenario/edit/{scenario_id}
pub async fn edit(
    State(state): State<AppState>,
    ScenarioContext(scenario): ScenarioContext,
    AppJson(input): AppJson<EditScenarioRequest>,
) -> AppResult<Json<ScenarioEditedResponse>> {
    let name = require_non_blank(input.scenario_name.as_deref(), "scenario_name")?;

    let scenario = ScenarioRepo::rename(&state.pool, scenario.id, name)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Scenario",
            id: scenario.id,
        })?;

    tracing::info!(scenario_id = scenario.id, "Scenario renamed");

    Ok(Json(ScenarioEditedResponse {
        status: "ok",
        scenario_id: scenario.id,
        scenario_name: scenario.name,
    }))
}

/// GET /project/{project_id}/scenario/edit
pub async fn list_for_edit(
    State(state): State<AppState>,
    ProjectContext(project): ProjectContext,
) -> AppResult<Json<EditableScenarios>> {
    let scenarios = ScenarioRepo::list_by_project(&state.pool, project.id).await?;

    if scenarios.is_empty() {
        return Ok(Json(EditableScenarios::NothingToEdit {
            message: "NOTHING_TO_EDIT",
        }));
    }

    Ok(Json(EditableScenarios::Scenarios {
        scenarios: scenarios.iter().map(ScenarioResponse::from).collect(),
    }))
}
