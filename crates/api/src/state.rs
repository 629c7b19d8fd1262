use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once in `main` and cheaply cloneable (the config sits behind `Arc`,
/// the pool is already reference-counted).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: sherlock_db::DbPool,
    /// Server configuration (token secret and lifetime are read by the auth gate).
    pub config: Arc<ServerConfig>,
}
