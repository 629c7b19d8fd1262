//! Repository for the `cases` table.

use sherlock_core::types::DbId;
use sqlx::PgPool;

use crate::models::case::{Case, CreateCase};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, scenario_id, name, created_at, updated_at";

/// Provides CRUD operations for test cases. A scenario's first cases are
/// created together with it through
/// [`ScenarioRepo::create_with_cases`](crate::repositories::ScenarioRepo::create_with_cases).
pub struct CaseRepo;

impl CaseRepo {
    /// Append a case to an existing scenario.
    pub async fn create(pool: &PgPool, input: &CreateCase) -> Result<Case, sqlx::Error> {
        let query = format!(
            "INSERT INTO cases (scenario_id, name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Case>(&query)
            .bind(input.scenario_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a case only if it belongs to the given scenario.
    pub async fn find_in_scenario(
        pool: &PgPool,
        case_id: DbId,
        scenario_id: DbId,
    ) -> Result<Option<Case>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cases WHERE id = $1 AND scenario_id = $2");
        sqlx::query_as::<_, Case>(&query)
            .bind(case_id)
            .bind(scenario_id)
            .fetch_optional(pool)
            .await
    }

    /// Rename a case. Returns `None` if no row with the given `id` exists.
    pub async fn rename(pool: &PgPool, id: DbId, name: &str) -> Result<Option<Case>, sqlx::Error> {
        let query = format!(
            "UPDATE cases SET name = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Case>(&query)
            .bind(id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all cases of a scenario in creation order.
    pub async fn list_by_scenario(
        pool: &PgPool,
        scenario_id: DbId,
    ) -> Result<Vec<Case>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cases WHERE scenario_id = $1 ORDER BY id");
        sqlx::query_as::<_, Case>(&query)
            .bind(scenario_id)
            .fetch_all(pool)
            .await
    }

    /// Find a case only if it belongs to a scenario of the given project.
    pub async fn find_in_project(
        pool: &PgPool,
        case_id: DbId,
        project_id: DbId,
    ) -> Result<Option<Case>, sqlx::Error> {
        let query = "SELECT c.id, c.scenario_id, c.name, c.created_at, c.updated_at
                     FROM cases c
                     JOIN scenarios s ON s.id = c.scenario_id
                     WHERE c.id = $1 AND s.project_id = $2";
        sqlx::query_as::<_, Case>(query)
            .bind(case_id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }
}
