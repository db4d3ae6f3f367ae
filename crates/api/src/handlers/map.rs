//! Public read views: the composed map and the statistics summary.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use locmap_core::layers::build_map_view;
use locmap_core::stats::aggregate;
use locmap_db::repositories::LocationRepo;
use serde::Deserialize;

use crate::config::parse_years;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters shared by the map and statistics endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct CohortParams {
    /// Comma-separated years, e.g. `2026,2027`. Overrides the configured years.
    pub years: Option<String>,
}

impl CohortParams {
    fn resolve(&self, state: &AppState) -> AppResult<Vec<i32>> {
        match self.years.as_deref() {
            Some(raw) => parse_years(raw).map_err(AppError::BadRequest),
            None => Ok(state.config.cohort_years.clone()),
        }
    }
}

/// GET /api/v1/map
///
/// Layers in display order with every marker's icon resolved against the
/// asset directory, plus the initial viewport.
pub async fn get_map(
    State(state): State<AppState>,
    Query(params): Query<CohortParams>,
) -> AppResult<impl IntoResponse> {
    let years = params.resolve(&state)?;
    let snapshot = LocationRepo::snapshot(&*state.store).await;
    let view = build_map_view(&snapshot, &years, &*state.assets);

    Ok(Json(DataResponse { data: view }))
}

/// GET /api/v1/stats
pub async fn get_stats(
    State(state): State<AppState>,
    Query(params): Query<CohortParams>,
) -> AppResult<impl IntoResponse> {
    let years = params.resolve(&state)?;
    let snapshot = LocationRepo::snapshot(&*state.store).await;

    Ok(Json(DataResponse {
        data: aggregate(&snapshot, &years),
    }))
}
