use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (the pool is internally reference-counted, the config
/// is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: registrar_db::DbPool,
    /// Server configuration (read by the auth extractor and middleware).
    pub config: Arc<ServerConfig>,
}
