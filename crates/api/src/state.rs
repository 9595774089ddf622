use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is internally reference-counted
/// and the config is behind `Arc`). No request-level mutable state
/// lives here: everything mutable is in the database.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: remat_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
