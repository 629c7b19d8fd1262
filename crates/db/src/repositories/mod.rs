//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod case_repo;
pub mod cycle_history_repo;
pub mod cycle_repo;
pub mod project_repo;
pub mod scenario_repo;
pub mod user_repo;

pub use case_repo::CaseRepo;
pub use cycle_history_repo::CycleHistoryRepo;
pub use cycle_repo::CycleRepo;
pub use project_repo::ProjectRepo;
pub use scenario_repo::ScenarioRepo;
pub use user_repo::UserRepo;
