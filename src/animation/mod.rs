//! Time-driven side of the morph.
//!
//! A [`morph::MorphPass`] holds one tween per grapheme, all sharing a start time.
//! [`driver::FrameDriver`] ticks it once per frame interval against a [`clock::Clock`].

pub mod clock;
pub mod driver;
pub mod ease;
pub mod morph;
pub mod tween;
