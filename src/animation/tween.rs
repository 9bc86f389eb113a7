use std::time::Duration;

use crate::{animation::ease::Ease, foundation::core::Rect, foundation::math::lerp};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        lerp(*a, *b, t)
    }
}

impl Lerp for Rect {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Rect::new(
            lerp(a.x, b.x, t),
            lerp(a.y, b.y, t),
            lerp(a.width, b.width, t),
            lerp(a.height, b.height, t),
        )
    }
}

/// Where a grapheme bitmap is drawn and how opaque the surface is.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MorphState {
    pub rect: Rect,
    pub opacity: f64,
}

impl MorphState {
    pub fn visible(rect: Rect) -> Self {
        Self { rect, opacity: 1.0 }
    }

    pub fn faded(rect: Rect) -> Self {
        Self { rect, opacity: 0.0 }
    }
}

impl Lerp for MorphState {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            rect: Rect::lerp(&a.rect, &b.rect, t),
            opacity: lerp(a.opacity, b.opacity, t),
        }
    }
}

/// Interpolation from `from` to `to` over `duration`, evaluated against elapsed time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    pub duration: Duration,
    pub ease: Ease,
}

impl<T: Lerp + Clone> Tween<T> {
    pub fn new(from: T, to: T, duration: Duration, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration,
            ease,
        }
    }

    /// Normalized, clamped time. A zero-length tween is always complete.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn sample(&self, elapsed: Duration) -> T {
        let t = self.ease.apply(self.progress(elapsed));
        T::lerp(&self.from, &self.to, t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
