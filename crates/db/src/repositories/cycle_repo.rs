//! Repository for the `cycles` table.

use sherlock_core::types::DbId;
use sqlx::PgPool;

use crate::models::cycle::Cycle;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, created_at";

/// Provides creation and lookups for execution cycles.
pub struct CycleRepo;

impl CycleRepo {
    /// Start a new cycle for a project.
    pub async fn create(pool: &PgPool, project_id: DbId) -> Result<Cycle, sqlx::Error> {
        let query = format!("INSERT INTO cycles (project_id) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Cycle>(&query)
            .bind(project_id)
            .fetch_one(pool)
            .await
    }

    /// Find a cycle by ID, scoped to its project.
    pub async fn find_in_project(
        pool: &PgPool,
        id: DbId,
        project_id: DbId,
    ) -> Result<Option<Cycle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cycles WHERE id = $1 AND project_id = $2");
        sqlx::query_as::<_, Cycle>(&query)
            .bind(id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// The most recently created cycle of a project; ties go to the highest id.
    pub async fn find_latest_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<Cycle>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cycles WHERE project_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, Cycle>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }
}
