//! Response shapes for API handlers.
//!
//! Entity rows from `sherlock_db` carry no presentation concerns; each entity
//! has one explicit response type here, built with `From<&Row>`.

use serde::Serialize;
use sherlock_core::cycle_stats::CycleStats;
use sherlock_core::types::{DbId, Timestamp};
use sherlock_db::models::case::Case;
use sherlock_db::models::cycle::{Cycle, CycleHistory};
use sherlock_db::models::project::Project;
use sherlock_db::models::scenario::Scenario;

/// `{ "message": CODE }` acknowledgement, optionally carrying the new row's id.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message, id: None }
    }

    pub fn with_id(message: &'static str, id: DbId) -> Self {
        Self {
            message,
            id: Some(id),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: DbId,
    pub name: String,
    pub is_private: bool,
    pub owner: String,
    pub type_of_project: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Project> for ProjectResponse {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            is_private: p.is_private,
            owner: p.owner.clone(),
            type_of_project: p.type_of_project.clone(),
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScenarioResponse {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
}

impl From<&Scenario> for ScenarioResponse {
    fn from(s: &Scenario) -> Self {
        Self {
            id: s.id,
            project_id: s.project_id,
            name: s.name.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CaseResponse {
    pub id: DbId,
    pub scenario_id: DbId,
    pub name: String,
}

impl From<&Case> for CaseResponse {
    fn from(c: &Case) -> Self {
        Self {
            id: c.id,
            scenario_id: c.scenario_id,
            name: c.name.clone(),
        }
    }
}

/// Cycle summary counts plus the derived pass rate.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total: u64,
    pub passed: u64,
    pub failed: u64,
    pub other: u64,
    pub pass_rate: f64,
}

impl From<CycleStats> for StatsResponse {
    fn from(stats: CycleStats) -> Self {
        Self {
            total: stats.total,
            passed: stats.passed,
            failed: stats.failed,
            other: stats.other,
            pass_rate: stats.pass_rate(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryEntryResponse {
    pub id: DbId,
    pub case_id: DbId,
    pub outcome: String,
    pub created_at: Timestamp,
}

impl From<&CycleHistory> for HistoryEntryResponse {
    fn from(h: &CycleHistory) -> Self {
        Self {
            id: h.id,
            case_id: h.case_id,
            outcome: h.outcome.clone(),
            created_at: h.created_at,
        }
    }
}

/// A cycle with its full history and tally.
#[derive(Debug, Serialize)]
pub struct CycleDetailResponse {
    pub id: DbId,
    pub project_id: DbId,
    pub created_at: Timestamp,
    #[serde(flatten)]
    pub stats: StatsResponse,
    pub history: Vec<HistoryEntryResponse>,
}

impl CycleDetailResponse {
    pub fn new(cycle: &Cycle, stats: CycleStats, history: &[CycleHistory]) -> Self {
        Self {
            id: cycle.id,
            project_id: cycle.project_id,
            created_at: cycle.created_at,
            stats: stats.into(),
            history: history.iter().map(HistoryEntryResponse::from).collect(),
        }
    }
}
