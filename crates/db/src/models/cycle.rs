//! Cycle and cycle history models.

use sherlock_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// One test-execution run of a project, from the `cycles` table.
#[derive(Debug, Clone, FromRow)]
pub struct Cycle {
    pub id: DbId,
    pub project_id: DbId,
    pub created_at: Timestamp,
}

/// Per-case outcome recorded for a cycle, from the `cycle_history` table.
#[derive(Debug, Clone, FromRow)]
pub struct CycleHistory {
    pub id: DbId,
    pub cycle_id: DbId,
    pub case_id: DbId,
    pub outcome: String,
    pub created_at: Timestamp,
}

/// DTO for recording an outcome.
#[derive(Debug, Clone)]
pub struct CreateCycleHistory {
    pub cycle_id: DbId,
    pub case_id: DbId,
    pub outcome: String,
}
