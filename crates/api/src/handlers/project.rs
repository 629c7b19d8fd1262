//! Handlers for the `/project` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use sherlock_core::cycle_stats::aggregate;
use sherlock_core::error::CoreError;
use sherlock_core::types::DbId;
use sherlock_core::validation::{optional_non_blank, require_non_blank, require_present};
use sherlock_db::models::project::{CreateProject, UpdateProject};
use sherlock_db::repositories::{CycleHistoryRepo, CycleRepo, ProjectRepo};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::middleware::context::ProjectContext;
use crate::response::{MessageResponse, ProjectResponse, StatsResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// JSON body shared by `POST /project/new` and `POST /project/edit/{id}`.
///
/// Every field is optional at the wire level; `new` requires all of them,
/// `edit` applies whichever are present.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectFields {
    pub project_name: Option<String>,
    pub is_private: Option<FlagValue>,
    pub project_owner: Option<String>,
    pub type_of_project: Option<String>,
}

/// A boolean flag as sent by clients: either a JSON bool or a string such as
/// `"true"` / `"0"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Text(String),
}

impl FlagValue {
    fn to_bool(&self, field: &str) -> Result<bool, CoreError> {
        match self {
            FlagValue::Bool(b) => Ok(*b),
            FlagValue::Text(text) => {
                let text = require_non_blank(Some(text.as_str()), field)?;
                match text.trim().to_ascii_lowercase().as_str() {
                    "true" | "1" | "yes" => Ok(true),
                    "false" | "0" | "no" => Ok(false),
                    _ => Err(CoreError::Validation(format!("{field} must be a boolean"))),
                }
            }
        }
    }
}

impl ProjectFields {
    /// Validate for creation; the first missing or blank field is reported.
    pub fn into_create(self) -> Result<CreateProject, CoreError> {
        let name = require_non_blank(self.project_name.as_deref(), "project_name")?.to_string();
        let is_private = require_present(self.is_private.as_ref(), "is_private")?
            .to_bool("is_private")?;
        let owner = require_non_blank(self.project_owner.as_deref(), "project_owner")?.to_string();
        let type_of_project =
            require_non_blank(self.type_of_project.as_deref(), "type_of_project")?.to_string();

        Ok(CreateProject {
            name,
            is_private,
            owner,
            type_of_project,
        })
    }

    /// Validate for a partial update; absent fields stay `None`.
    pub fn into_update(self) -> Result<UpdateProject, CoreError> {
        Ok(UpdateProject {
            name: optional_non_blank(self.project_name.as_deref(), "project_name")?
                .map(str::to_string),
            is_private: self
                .is_private
                .as_ref()
                .map(|flag| flag.to_bool("is_private"))
                .transpose()?,
            owner: optional_non_blank(self.project_owner.as_deref(), "project_owner")?
                .map(str::to_string),
            type_of_project: optional_non_blank(self.type_of_project.as_deref(), "type_of_project")?
                .map(str::to_string),
        })
    }
}

/// `{get_cycle: "YES", cycle_id, ...stats}` or `{get_cycle: "NO"}`.
#[derive(Debug, Serialize)]
pub struct LastCycleResponse {
    pub get_cycle: &'static str,
    #[serde(flatten)]
    pub details: Option<LastCycleDetails>,
}

#[derive(Debug, Serialize)]
pub struct LastCycleDetails {
    pub cycle_id: DbId,
    #[serde(flatten)]
    pub stats: StatsResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /project/list
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectResponse>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects.iter().map(ProjectResponse::from).collect()))
}

/// GET /project/show/{project_id}
pub async fn show(ProjectContext(project): ProjectContext) -> Json<ProjectResponse> {
    Json(ProjectResponse::from(&project))
}

/// GET /project/show_cycle_details/{project_id}
///
/// Tally of the project's most recent cycle, or `get_cycle: "NO"` when the
/// project has never been run.
pub async fn show_last_cycle_stats(
    State(state): State<AppState>,
    ProjectContext(project): ProjectContext,
) -> AppResult<Json<LastCycleResponse>> {
    let Some(cycle) = CycleRepo::find_latest_for_project(&state.pool, project.id).await? else {
        return Ok(Json(LastCycleResponse {
            get_cycle: "NO",
            details: None,
        }));
    };

    let history = CycleHistoryRepo::list_by_cycle(&state.pool, cycle.id).await?;
    let stats = aggregate(history.iter().map(|entry| entry.outcome.as_str()));

    Ok(Json(LastCycleResponse {
        get_cycle: "YES",
        details: Some(LastCycleDetails {
            cycle_id: cycle.id,
            stats: stats.into(),
        }),
    }))
}

/// POST /project/new
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(input): AppJson<ProjectFields>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let input = input.into_create()?;
    let project = ProjectRepo::create(&state.pool, &input).await?;

    tracing::info!(
        project_id = project.id,
        name = %project.name,
        created_by = %user.username,
        "Project created"
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_id("PROJECT_CREATED", project.id)),
    ))
}

/// POST /project/edit/{project_id}
pub async fn edit(
    State(state): State<AppState>,
    user: AuthUser,
    ProjectContext(project): ProjectContext,
    AppJson(input): AppJson<ProjectFields>,
) -> AppResult<Json<MessageResponse>> {
    let input = input.into_update()?;
    ProjectRepo::update(&state.pool, project.id, &input)
        .await?
        .ok_or(CoreError::ProjectNotFound(project.id))?;

    tracing::info!(project_id = project.id, edited_by = %user.username, "Project edited");

    Ok(Json(MessageResponse::new("PROJECT_EDITED")))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn full() -> ProjectFields {
        ProjectFields {
            project_name: Some("Checkout".into()),
            is_private: Some(FlagValue::Bool(true)),
            project_owner: Some("qa-team".into()),
            type_of_project: Some("web".into()),
        }
    }

    #[test]
    fn create_accepts_complete_input() {
        let create = full().into_create().unwrap();
        assert_eq!(create.name, "Checkout");
        assert!(create.is_private);
        assert_eq!(create.owner, "qa-team");
        assert_eq!(create.type_of_project, "web");
    }

    #[test]
    fn create_names_first_missing_field() {
        let input = ProjectFields {
            project_owner: None,
            type_of_project: None,
            ..full()
        };
        assert_matches!(
            input.into_create(),
            Err(CoreError::Validation(msg)) if msg == "project_owner is required"
        );
    }

    #[test]
    fn create_rejects_blank_name() {
        let input = ProjectFields {
            project_name: Some("  ".into()),
            ..full()
        };
        assert_matches!(
            input.into_create(),
            Err(CoreError::Validation(msg)) if msg.starts_with("project_name")
        );
    }

    #[test]
    fn create_requires_is_private() {
        let input = ProjectFields {
            is_private: None,
            ..full()
        };
        assert_matches!(
            input.into_create(),
            Err(CoreError::Validation(msg)) if msg == "is_private is required"
        );
    }

    #[test]
    fn textual_flags_are_understood() {
        assert!(FlagValue::Text("TRUE".into()).to_bool("f").unwrap());
        assert!(!FlagValue::Text("0".into()).to_bool("f").unwrap());
        assert!(FlagValue::Text("".into()).to_bool("f").is_err());
        assert!(FlagValue::Text("maybe".into()).to_bool("f").is_err());
    }

    #[test]
    fn update_keeps_absent_fields_none() {
        let input = ProjectFields {
            project_name: Some("Renamed".into()),
            ..Default::default()
        };
        let update = input.into_update().unwrap();
        assert_eq!(update.name.as_deref(), Some("Renamed"));
        assert!(update.is_private.is_none());
        assert!(update.owner.is_none());
        assert!(update.type_of_project.is_none());
    }

    #[test]
    fn update_applies_false_flag() {
        let input = ProjectFields {
            is_private: Some(FlagValue::Bool(false)),
            ..Default::default()
        };
        assert_eq!(input.into_update().unwrap().is_private, Some(false));
    }

    #[test]
    fn update_rejects_present_but_blank() {
        let input = ProjectFields {
            type_of_project: Some("".into()),
            ..Default::default()
        };
        assert_matches!(
            input.into_update(),
            Err(CoreError::Validation(msg)) if msg.contains("type_of_project")
        );
    }

    #[test]
    fn flag_value_deserializes_from_bool_or_string() {
        let fields: ProjectFields =
            serde_json::from_str(r#"{"is_private": false, "project_name": "x"}"#).unwrap();
        assert_matches!(fields.is_private, Some(FlagValue::Bool(false)));

        let fields: ProjectFields = serde_json::from_str(r#"{"is_private": "yes"}"#).unwrap();
        assert_matches!(fields.is_private, Some(FlagValue::Text(ref t)) if t == "yes");
    }

    #[test]
    fn last_cycle_response_shapes() {
        let none = serde_json::to_value(LastCycleResponse {
            get_cycle: "NO",
            details: None,
        })
        .unwrap();
        assert_eq!(none, serde_json::json!({ "get_cycle": "NO" }));

        let found = serde_json::to_value(LastCycleResponse {
            get_cycle: "YES",
            details: Some(LastCycleDetails {
                cycle_id: 3,
                stats: aggregate(["pass", "fail"]).into(),
            }),
        })
        .unwrap();
        assert_eq!(found["get_cycle"], "YES");
        assert_eq!(found["cycle_id"], 3);
        assert_eq!(found["total"], 2);
        assert_eq!(found["passed"], 1);
        assert_eq!(found["failed"], 1);
        assert_eq!(found["other"], 0);
        assert_eq!(found["pass_rate"], 50.0);
    }
}
