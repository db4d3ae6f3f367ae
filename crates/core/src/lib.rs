//! Location directory engine.
//!
//! Pure domain logic for the location map: the record model, per-category
//! id allocation, classification into map overlays, layer composition,
//! statistics, and the in-memory mutations behind create/update/delete.
//! No storage here; callers pass in loaded records.

pub mod allocator;
pub mod auth;
pub mod category;
pub mod classify;
pub mod error;
pub mod icons;
pub mod layers;
pub mod location;
pub mod mutation;
pub mod snapshot;
pub mod stats;

#[cfg(test)]
pub(crate) mod test_support;
