//! Test case entity model.

use sherlock_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A case row from the `cases` table.
#[derive(Debug, Clone, FromRow)]
pub struct Case {
    pub id: DbId,
    pub scenario_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for appending a case to an existing scenario.
#[derive(Debug, Clone)]
pub struct CreateCase {
    pub scenario_id: DbId,
    pub name: String,
}
