use std::sync::Arc;

use locmap_core::icons::AssetDir;
use locmap_db::JsonStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Per-category JSON record store.
    pub store: Arc<JsonStore>,
    /// Server configuration (PIN, cohort years, directories).
    pub config: Arc<ServerConfig>,
    /// Marker icon assets.
    pub assets: Arc<AssetDir>,
}
