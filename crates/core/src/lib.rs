//! Domain types and pure logic shared by the database and API crates.

pub mod cycle_stats;
pub mod error;
pub mod outcome;
pub mod scenario_form;
pub mod types;
pub mod validation;
