use std::time::Duration;

use crate::{
    animation::driver::DEFAULT_FRAME_INTERVAL,
    animation::ease::Ease,
    foundation::error::{MorphError, MorphResult},
    layout::engine::DEFAULT_GLYPH_LABEL,
    render::surface::InkStyle,
};

/// Tunables around the fixed-duration morph.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MorphConfig {
    /// Display refresh cadence of the frame loop, in milliseconds.
    pub frame_interval_ms: f64,
    pub ink: InkStyle,
    pub font_family: String,
    /// Glyph measured to stand in for every character of the monospace font.
    pub glyph_label: String,
    pub ease: Ease,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: DEFAULT_FRAME_INTERVAL.as_secs_f64() * 1000.0,
            ink: InkStyle::default(),
            font_family: "monospace".to_string(),
            glyph_label: DEFAULT_GLYPH_LABEL.to_string(),
            ease: Ease::OutQuad,
        }
    }
}

impl MorphConfig {
    /// Defaults overlaid with `INKMORPH_FRAME_INTERVAL_MS` and `INKMORPH_INK_WIDTH`.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`; unparsable or non-positive values are ignored.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let positive = |key: &str| {
            lookup(key)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite() && *v > 0.0)
        };
        if let Some(ms) = positive("INKMORPH_FRAME_INTERVAL_MS") {
            self.frame_interval_ms = ms;
        }
        if let Some(w) = positive("INKMORPH_INK_WIDTH") {
            self.ink.width = w;
        }
        self
    }

    pub fn frame_interval(&self) -> Duration {
        if self.frame_interval_ms.is_finite() && self.frame_interval_ms > 0.0 {
            Duration::from_nanos((self.frame_interval_ms * 1_000_000.0).round() as u64)
        } else {
            DEFAULT_FRAME_INTERVAL
        }
    }

    pub fn validate(&self) -> MorphResult<()> {
        if !self.frame_interval_ms.is_finite() || self.frame_interval_ms <= 0.0 {
            return Err(MorphError::validation("frame_interval_ms must be > 0"));
        }
        if !self.ink.width.is_finite() || self.ink.width <= 0.0 {
            return Err(MorphError::validation("ink width must be > 0"));
        }
        if self.glyph_label.is_empty() {
            return Err(MorphError::validation("glyph_label must be non-empty"));
        }
        if self.font_family.trim().is_empty() {
            return Err(MorphError::validation("font_family must be non-empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
