//! Bulk export, import and backup of every location collection.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use locmap_core::snapshot::LocationSnapshot;
use locmap_db::repositories::LocationRepo;

use crate::error::AppResult;
use crate::middleware::auth::Maintenance;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/export
pub async fn export_data(
    Maintenance(auth): Maintenance,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let bundle = LocationRepo::export_all(&*state.store, &auth).await?;

    tracing::info!(total = bundle.summary.total, "Locations exported");

    Ok(Json(DataResponse { data: bundle }))
}

/// POST /api/v1/import
///
/// Replaces every collection. A category absent from the body is emptied.
pub async fn import_data(
    Maintenance(auth): Maintenance,
    State(state): State<AppState>,
    Json(payload): Json<LocationSnapshot>,
) -> AppResult<impl IntoResponse> {
    let summary = LocationRepo::import_all(&*state.store, &auth, payload).await?;

    tracing::info!(total = summary.total, "Locations imported");

    Ok(Json(DataResponse { data: summary }))
}

/// POST /api/v1/backup
///
/// Writes every collection to a new file under the data directory's
/// `backups/` folder.
pub async fn create_backup(
    Maintenance(auth): Maintenance,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let receipt = LocationRepo::backup(&*state.store, &auth).await?;

    tracing::info!(file = %receipt.file, total = receipt.summary.total, "Backup created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: receipt })))
}
