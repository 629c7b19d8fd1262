//! Repository for the `scenarios` table.

use sherlock_core::types::DbId;
use sqlx::PgPool;

use crate::models::case::Case;
use crate::models::scenario::{CreateScenarioWithCases, Scenario};
use crate::repositories::case_repo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, name, created_at, updated_at";

/// Provides CRUD operations for scenarios.
pub struct ScenarioRepo;

impl ScenarioRepo {
    /// Insert a scenario and its cases in one transaction.
    ///
    /// Cases are inserted in the order given, so their ids follow that order.
    pub async fn create_with_cases(
        pool: &PgPool,
        input: &CreateScenarioWithCases,
    ) -> Result<(Scenario, Vec<Case>), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO scenarios (project_id, name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let scenario = sqlx::query_as::<_, Scenario>(&insert_query)
            .bind(input.project_id)
            .bind(&input.name)
            .fetch_one(&mut *tx)
            .await?;

        let case_query = format!(
            "INSERT INTO cases (scenario_id, name)
             VALUES ($1, $2)
             RETURNING {}",
            case_repo::COLUMNS
        );
        let mut cases = Vec::with_capacity(input.case_names.len());
        for name in &input.case_names {
            let case = sqlx::query_as::<_, Case>(&case_query)
                .bind(scenario.id)
                .bind(name)
                .fetch_one(&mut *tx)
                .await?;
            cases.push(case);
        }

        tx.commit().await?;
        Ok((scenario, cases))
    }

    /// Find a scenario by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Scenario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scenarios WHERE id = $1");
        sqlx::query_as::<_, Scenario>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all scenarios belonging to a project, oldest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Scenario>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scenarios WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, Scenario>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Rename a scenario. Returns `None` if no row with the given `id` exists.
    pub async fn rename(
        pool: &PgPool,
        id: DbId,
        name: &str,
    ) -> Result<Option<Scenario>, sqlx::Error> {
        let query = format!(
            "UPDATE scenarios SET name = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Scenario>(&query)
            .bind(id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }
}
