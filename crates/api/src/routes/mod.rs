pub mod health;
pub mod locations;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /locations/{category}                            list, create (PIN)
/// /locations/{category}/{id}                       update, delete (PIN)
///
/// /export                                          export all collections (PIN)
/// /import                                          replace all collections (PIN)
/// /backup                                          server-side backup (PIN)
///
/// /map                                             layers + viewport (?years=)
/// /stats                                           statistics summary (?years=)
/// /icons                                           marker asset check
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/locations", locations::router())
        .route("/export", get(handlers::transfer::export_data))
        .route("/import", post(handlers::transfer::import_data))
        .route("/backup", post(handlers::transfer::create_backup))
        .route("/map", get(handlers::map::get_map))
        .route("/stats", get(handlers::map::get_stats))
        .route("/icons", get(handlers::icons::check_icons))
}
