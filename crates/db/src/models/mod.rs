//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) where the entity can be edited

pub mod case;
pub mod cycle;
pub mod project;
pub mod scenario;
pub mod user;
