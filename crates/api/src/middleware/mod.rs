//! Request extractors shared by handlers.
//!
//! - [`auth::Maintenance`] -- Resolves the maintenance PIN header into an `AuthContext`.

pub mod auth;
