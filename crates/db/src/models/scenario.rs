//! Scenario entity model and DTOs.

use sherlock_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A scenario row from the `scenarios` table.
#[derive(Debug, Clone, FromRow)]
pub struct Scenario {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a scenario together with its first cases.
#[derive(Debug, Clone)]
pub struct CreateScenarioWithCases {
    pub project_id: DbId,
    pub name: String,
    /// Case names in creation order.
    pub case_names: Vec<String>,
}
