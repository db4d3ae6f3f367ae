pub mod icons;
pub mod locations;
pub mod map;
pub mod transfer;

use locmap_core::category::Category;

use crate::error::{AppError, AppResult};

/// Resolve a `{category}` path segment. Unknown slugs are a missing resource.
pub(crate) fn category_from_path(slug: &str) -> AppResult<Category> {
    Category::from_slug(slug)
        .map_err(|_| AppError::NotFound(format!("Unknown location category '{slug}'")))
}
