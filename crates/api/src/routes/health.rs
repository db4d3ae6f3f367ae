//! Liveness and readiness at `/health`, outside `/api/v1`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use locmap_core::icons::verify_icons;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the data directory is gone.
    pub status: &'static str,
    pub version: &'static str,
    pub storage_healthy: bool,
    /// Marker assets that will render as the generic marker.
    pub icons_missing: usize,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let storage_healthy = locmap_db::health_check(&state.store).await.is_ok();
    let icons_missing = verify_icons(&*state.assets)
        .iter()
        .filter(|check| !check.exists)
        .count();

    Json(HealthResponse {
        status: if storage_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        storage_healthy,
        icons_missing,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
