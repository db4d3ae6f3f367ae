//! Maintenance PIN extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use locmap_core::auth::AuthContext;
use locmap_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the maintenance PIN.
pub const MAINTENANCE_PIN_HEADER: &str = "x-maintenance-pin";

/// Authorized maintenance access for the current request.
///
/// A missing or wrong PIN, or no configured PIN at all, rejects with
/// `401 Unauthorized` before any later extractor (such as a JSON body) runs.
///
/// ```ignore
/// async fn my_handler(Maintenance(auth): Maintenance) -> AppResult<Json<()>> {
///     LocationRepo::list(store, &auth, category).await?;
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Maintenance(pub AuthContext);

impl FromRequestParts<AppState> for Maintenance {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let pin = state.config.maintenance_pin.as_ref().ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Maintenance access is disabled".into(),
            ))
        })?;

        let candidate = parts
            .headers
            .get(MAINTENANCE_PIN_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(format!(
                    "Missing {MAINTENANCE_PIN_HEADER} header"
                )))
            })?;

        if !pin.verify(candidate) {
            tracing::warn!(path = %parts.uri.path(), "Rejected maintenance PIN");
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid maintenance PIN".into(),
            )));
        }

        Ok(Maintenance(AuthContext::authorized()))
    }
}
