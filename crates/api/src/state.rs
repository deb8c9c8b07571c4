use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Nothing request-specific lives here; every handler re-reads from the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, opened once at startup.
    pub pool: epms_db::DbPool,
    /// Server configuration (JWT secret, timeouts).
    pub config: Arc<ServerConfig>,
}
