//! Project entity model and DTOs.

use sherlock_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub is_private: bool,
    pub owner: String,
    pub type_of_project: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project. Every field is required.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub name: String,
    pub is_private: bool,
    pub owner: String,
    pub type_of_project: String,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub is_private: Option<bool>,
    pub owner: Option<String>,
    pub type_of_project: Option<String>,
}
