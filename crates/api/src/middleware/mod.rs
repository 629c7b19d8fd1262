//! Request preprocessing chain run in front of every protected route.
//!
//! Order of execution:
//!
//! 1. [`auth::require_auth`] -- verifies credentials, publishes [`auth::AuthUser`].
//! 2. [`context::resolve_context`] -- loads the project, scenario and cycle
//!    named by the path and publishes them as request extensions.
//!
//! Each step either short-circuits with an [`AppError`](crate::error::AppError)
//! response or hands the request to the next one.

pub mod auth;
pub mod context;
