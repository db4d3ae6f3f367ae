use axum::routing::{get, put};
use axum::Router;

use crate::handlers::locations;
use crate::state::AppState;

/// Routes mounted at `/locations`.
///
/// ```text
/// GET    /{category}                  list_locations
/// POST   /{category}                  create_location
/// PUT    /{category}/{id}             update_location
/// DELETE /{category}/{id}             delete_location
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{category}",
            get(locations::list_locations).post(locations::create_location),
        )
        .route(
            "/{category}/{id}",
            put(locations::update_location).delete(locations::delete_location),
        )
}
