use std::collections::HashMap;

use crate::{
    foundation::core::{FontSpec, Rect},
    foundation::error::{MorphError, MorphResult},
    ink::model::{AnimationData, Segment},
    layout::metrics::{GlyphMeasure, GlyphMetrics},
};

/// Label measured to represent every glyph of a monospace font.
pub const DEFAULT_GLYPH_LABEL: &str = "X";

/// Grid cell of one character index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CharacterPosition {
    pub row: usize,
    pub column: usize,
}

/// Position of every char index `0..=len` of a laid-out string.
///
/// The entry at `len` is the cursor position after the last character.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PositionMap {
    positions: Vec<CharacterPosition>,
}

impl PositionMap {
    pub fn get(&self, index: usize) -> MorphResult<CharacterPosition> {
        self.positions.get(index).copied().ok_or_else(|| {
            MorphError::layout(format!(
                "position index {index} outside [0, {}]",
                self.text_len()
            ))
        })
    }

    /// Char length of the laid-out text (one less than the entry count).
    pub fn text_len(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, CharacterPosition)> + '_ {
        self.positions.iter().copied().enumerate()
    }

    pub fn rows(&self) -> usize {
        self.positions.last().map_or(1, |p| p.row + 1)
    }
}

/// Fixed-width character-wrapping layout with a per-engine glyph metric cache.
///
/// The cache is keyed by label and dropped whenever the font changes.
pub struct LayoutEngine<M> {
    measure: M,
    glyph_label: String,
    font: Option<FontSpec>,
    cache: HashMap<String, GlyphMetrics>,
}

impl<M: GlyphMeasure> LayoutEngine<M> {
    pub fn new(measure: M) -> Self {
        Self {
            measure,
            glyph_label: DEFAULT_GLYPH_LABEL.to_string(),
            font: None,
            cache: HashMap::new(),
        }
    }

    pub fn with_glyph_label(mut self, label: impl Into<String>) -> Self {
        self.glyph_label = label.into();
        self.invalidate();
        self
    }

    pub fn font(&self) -> Option<&FontSpec> {
        self.font.as_ref()
    }

    /// Switch fonts. Returns `true` when cached metrics were invalidated.
    pub fn set_font(&mut self, font: FontSpec) -> bool {
        if self.font.as_ref() == Some(&font) {
            return false;
        }
        tracing::debug!(%font, cached = self.cache.len(), "font changed, dropping glyph metrics");
        self.font = Some(font);
        self.invalidate();
        true
    }

    /// Drop every cached glyph measurement.
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }

    pub fn cached_labels(&self) -> usize {
        self.cache.len()
    }

    /// Metrics of the representative glyph.
    pub fn metrics(&mut self) -> MorphResult<GlyphMetrics> {
        let label = self.glyph_label.clone();
        self.metrics_for(&label)
    }

    pub fn metrics_for(&mut self, label: &str) -> MorphResult<GlyphMetrics> {
        if let Some(m) = self.cache.get(label) {
            return Ok(*m);
        }
        let font = self
            .font
            .as_ref()
            .ok_or_else(|| MorphError::font("no font set on layout engine"))?;
        let m = self.measure.measure(label, font)?;
        if !(m.advance.is_finite() && m.advance > 0.0 && m.ascent.is_finite()) {
            return Err(MorphError::font(format!(
                "unusable metrics for '{label}': advance {}, ascent {}",
                m.advance, m.ascent
            )));
        }
        self.cache.insert(label.to_string(), m);
        Ok(m)
    }

    /// Lay out `text` into rows no wider than `wrap_width`.
    ///
    /// A newline ends its row. Any other character that would overflow the
    /// row opens a new one and becomes its first cell; a row always keeps at
    /// least one character. No word breaking.
    pub fn layout(&mut self, text: &str, wrap_width: f64) -> MorphResult<PositionMap> {
        if !wrap_width.is_finite() {
            return Err(MorphError::validation("wrap width must be finite"));
        }
        let advance = self.metrics()?.advance;

        let mut positions = Vec::with_capacity(text.len() + 1);
        let mut row = 0usize;
        let mut column = 0usize;
        let mut rolling = 0.0f64;

        for ch in text.chars() {
            if ch == '\n' {
                positions.push(CharacterPosition { row, column });
                row += 1;
                column = 0;
                rolling = 0.0;
                continue;
            }

            rolling += advance;
            if rolling > wrap_width && column > 0 {
                row += 1;
                column = 0;
                rolling = advance;
            }
            positions.push(CharacterPosition { row, column });
            column += 1;
        }
        positions.push(CharacterPosition { row, column });

        Ok(PositionMap { positions })
    }

    /// Final on-screen rect of `segment`, whose indices are relative to the
    /// predicted text that follows `context_len` chars of context.
    pub fn target_rect(
        &mut self,
        positions: &PositionMap,
        context_len: usize,
        segment: &Segment,
        data: &AnimationData,
    ) -> MorphResult<Rect> {
        let m = self.metrics()?;
        let begin = positions.get(context_len + segment.begin_index)?;
        positions.get(context_len + segment.end_index)?;

        Ok(Rect::new(
            data.padding + (begin.column as f64) * m.advance,
            data.padding - data.scroll_top + (begin.row as f64) * m.ascent,
            (segment.span() as f64) * m.advance,
            m.ascent,
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
