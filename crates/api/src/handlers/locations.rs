//! Handlers for per-category location maintenance.
//!
//! Every endpoint requires the maintenance PIN. [`Maintenance`] rejects
//! before the path or body is looked at.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use locmap_core::location::LocationInput;
use locmap_db::repositories::LocationRepo;

use crate::error::AppResult;
use crate::handlers::category_from_path;
use crate::middleware::auth::Maintenance;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/locations/{category}
pub async fn list_locations(
    Maintenance(auth): Maintenance,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let category = category_from_path(&slug)?;
    let records = LocationRepo::list(&*state.store, &auth, category).await?;

    Ok(Json(DataResponse { data: records }))
}

/// POST /api/v1/locations/{category}
///
/// Requires name, city, address and coordinates. State defaults to active and
/// the opening date to today.
pub async fn create_location(
    Maintenance(auth): Maintenance,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<LocationInput>,
) -> AppResult<impl IntoResponse> {
    let category = category_from_path(&slug)?;
    let created = LocationRepo::create(&*state.store, &auth, category, input).await?;

    tracing::info!(category = %category, id = %created.id, "Location created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// PUT /api/v1/locations/{category}/{id}
///
/// Merges the supplied fields onto the record. The id never changes.
pub async fn update_location(
    Maintenance(auth): Maintenance,
    State(state): State<AppState>,
    Path((slug, id)): Path<(String, String)>,
    Json(input): Json<LocationInput>,
) -> AppResult<impl IntoResponse> {
    let category = category_from_path(&slug)?;
    let updated = LocationRepo::update(&*state.store, &auth, category, &id, input).await?;

    tracing::info!(category = %category, id = %updated.id, "Location updated");

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/locations/{category}/{id}
pub async fn delete_location(
    Maintenance(auth): Maintenance,
    State(state): State<AppState>,
    Path((slug, id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let category = category_from_path(&slug)?;
    LocationRepo::delete(&*state.store, &auth, category, &id).await?;

    tracing::info!(category = %category, id = %id, "Location deleted");

    Ok(StatusCode::NO_CONTENT)
}
