use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use locmap_core::icons::verify_icons;

use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/icons
///
/// Presence of every marker asset the style table can select.
pub async fn check_icons(State(state): State<AppState>) -> impl IntoResponse {
    let checks = verify_icons(&*state.assets);

    let missing = checks.iter().filter(|c| !c.exists).count();
    if missing > 0 {
        tracing::warn!(missing, root = %state.assets.root().display(), "Marker icons missing");
    }

    Json(DataResponse { data: checks })
}
