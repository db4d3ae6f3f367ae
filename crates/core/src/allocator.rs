//! Per-category id allocation.
//!
//! Ids are `<prefix><3-digit sequence>`. The search always restarts at 1, so
//! the id of a deleted low-numbered record is handed out again by the next
//! create.

use std::collections::HashSet;

use crate::category::Category;
use crate::error::CoreError;
use crate::location::Location;

/// Number of sequence values tried before giving up.
pub const MAX_ID_CANDIDATES: u32 = 1000;

/// Format the id for `sequence` in `category`, e.g. `TO014`.
pub fn format_id(category: Category, sequence: u32) -> String {
    format!("{}{sequence:03}", category.prefix())
}

/// Return the first free id in `category` given its current records.
pub fn allocate_id(category: Category, existing: &[Location]) -> Result<String, CoreError> {
    let taken: HashSet<&str> = existing.iter().map(|loc| loc.id.as_str()).collect();

    (1..=MAX_ID_CANDIDATES)
        .map(|sequence| format_id(category, sequence))
        .find(|candidate| !taken.contains(candidate.as_str()))
        .ok_or(CoreError::AllocationExhausted { category })
}
