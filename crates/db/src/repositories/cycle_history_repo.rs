//! Repository for the `cycle_history` table.

use sherlock_core::types::DbId;
use sqlx::PgPool;

use crate::models::cycle::{CreateCycleHistory, CycleHistory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, cycle_id, case_id, outcome, created_at";

/// Provides per-case outcome records for cycles.
pub struct CycleHistoryRepo;

impl CycleHistoryRepo {
    /// Record one case outcome.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCycleHistory,
    ) -> Result<CycleHistory, sqlx::Error> {
        let query = format!(
            "INSERT INTO cycle_history (cycle_id, case_id, outcome)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CycleHistory>(&query)
            .bind(input.cycle_id)
            .bind(input.case_id)
            .bind(&input.outcome)
            .fetch_one(pool)
            .await
    }

    /// Full history of a cycle in recording order.
    pub async fn list_by_cycle(
        pool: &PgPool,
        cycle_id: DbId,
    ) -> Result<Vec<CycleHistory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cycle_history WHERE cycle_id = $1 ORDER BY id");
        sqlx::query_as::<_, CycleHistory>(&query)
            .bind(cycle_id)
            .fetch_all(pool)
            .await
    }
}
