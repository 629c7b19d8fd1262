//! Handlers for the `/project/{project_id}/cycle` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use sherlock_core::cycle_stats::aggregate;
use sherlock_core::error::CoreError;
use sherlock_core::outcome::{is_known, KNOWN_OUTCOMES};
use sherlock_core::types::DbId;
use sherlock_core::validation::{require_non_blank, require_present};
use sherlock_db::models::cycle::CreateCycleHistory;
use sherlock_db::repositories::{CaseRepo, CycleHistoryRepo, CycleRepo};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::middleware::context::{CycleContext, ProjectContext};
use crate::response::{CycleDetailResponse, MessageResponse};
use crate::state::AppState;

/// Request body for `POST .../cycle/{cycle_id}/history`.
#[derive(Debug, Deserialize)]
pub struct RecordOutcomeRequest {
    pub case_id: Option<DbId>,
    pub outcome: Option<String>,
}

/// POST /project/{project_id}/cycle/new
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    ProjectContext(project): ProjectContext,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let cycle = CycleRepo::create(&state.pool, project.id).await?;

    tracing::info!(
        project_id = project.id,
        cycle_id = cycle.id,
        started_by = %user.username,
        "Cycle started"
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_id("CYCLE_CREATED", cycle.id)),
    ))
}

/// GET /project/{project_id}/cycle/{cycle_id}
pub async fn show(
    State(state): State<AppState>,
    CycleContext(cycle): CycleContext,
) -> AppResult<Json<CycleDetailResponse>> {
    let history = CycleHistoryRepo::list_by_cycle(&state.pool, cycle.id).await?;
    let stats = aggregate(history.iter().map(|entry| entry.outcome.as_str()));
    Ok(Json(CycleDetailResponse::new(&cycle, stats, &history)))
}

/// POST /project/{project_id}/cycle/{cycle_id}/history
///
/// Record one case outcome. The case must belong to a scenario of the cycle's
/// project. Outcomes are stored trimmed and lowercased; values outside
/// [`KNOWN_OUTCOMES`] are accepted and tallied as "other".
pub async fn record_outcome(
    State(state): State<AppState>,
    user: AuthUser,
    ProjectContext(project): ProjectContext,
    CycleContext(cycle): CycleContext,
    AppJson(input): AppJson<RecordOutcomeRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let case_id = require_present(input.case_id, "case_id")?;
    let outcome = require_non_blank(input.outcome.as_deref(), "outcome")?
        .trim()
        .to_ascii_lowercase();
    if !is_known(&outcome) {
        tracing::warn!(
            outcome = %outcome,
            known = ?KNOWN_OUTCOMES,
            "Unrecognised outcome recorded"
        );
    }

    CaseRepo::find_in_project(&state.pool, case_id, project.id)
        .await?
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "case_id {case_id} does not belong to project {}",
                project.id
            ))
        })?;

    let entry = CycleHistoryRepo::create(
        &state.pool,
        &CreateCycleHistory {
            cycle_id: cycle.id,
            case_id,
            outcome,
        },
    )
    .await?;

    tracing::info!(
        cycle_id = cycle.id,
        case_id,
        outcome = %entry.outcome,
        recorded_by = %user.username,
        "Outcome recorded"
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_id("OUTCOME_RECORDED", entry.id)),
    ))
}
