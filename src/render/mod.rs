//! Pixel side of the morph: the device-pixel surface, ink snapshots and PNG output.

pub mod bitmap;
/// PNG snapshots of a surface.
pub mod png;
/// Ink bounds and pixel capture for a set of point ranges.
pub mod region;
pub mod surface;
