use std::sync::Arc;

use photo_core::Catalog;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the catalog is a process-wide static and the config
/// sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Read-only preset tables shared by every request.
    pub catalog: &'static Catalog,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// State backed by the built-in catalog.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            catalog: photo_core::catalog(),
            config: Arc::new(config),
        }
    }
}
