//! Geometry, colors and the crate-wide error type.

pub mod core;
pub mod error;
pub mod math;
