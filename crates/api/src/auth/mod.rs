//! Authentication primitives.
//!
//! - [`pin`] -- maintenance PIN digest and verification.

pub mod pin;
