use crate::{
    foundation::core::FontSpec,
    foundation::error::{MorphError, MorphResult},
};

/// Horizontal advance and em-height ascent of a glyph run, in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlyphMetrics {
    pub advance: f64,
    pub ascent: f64,
}

/// Measures text for the layout engine. Results must be deterministic for a fixed font.
pub trait GlyphMeasure {
    fn measure(&mut self, label: &str, font: &FontSpec) -> MorphResult<GlyphMetrics>;
}

/// Metrics as fixed fractions of the font size, for hosts that render a
/// known monospace face.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MonospaceRatio {
    pub advance_em: f64,
    pub ascent_em: f64,
}

impl Default for MonospaceRatio {
    fn default() -> Self {
        Self {
            advance_em: 0.6,
            ascent_em: 0.8,
        }
    }
}

impl GlyphMeasure for MonospaceRatio {
    fn measure(&mut self, label: &str, font: &FontSpec) -> MorphResult<GlyphMetrics> {
        let size = f64::from(font.size_px);
        let glyphs = label.chars().count() as f64;
        Ok(GlyphMetrics {
            advance: self.advance_em * size * glyphs,
            ascent: self.ascent_em * size,
        })
    }
}

/// Shapes labels with Parley against a font loaded from bytes.
pub struct ParleyMeasure {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    family_name: String,
}

impl ParleyMeasure {
    pub fn from_font_bytes(font_bytes: &[u8]) -> MorphResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| MorphError::font("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| MorphError::font("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
        })
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }
}

impl GlyphMeasure for ParleyMeasure {
    fn measure(&mut self, label: &str, font: &FontSpec) -> MorphResult<GlyphMetrics> {
        if font.family != self.family_name {
            tracing::debug!(
                requested = %font.family,
                loaded = %self.family_name,
                "measuring with the loaded face"
            );
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, label, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font.size_px));
        let mut layout: parley::Layout<()> = builder.build(label);
        layout.break_all_lines(None);

        let line = layout
            .lines()
            .next()
            .ok_or_else(|| MorphError::font(format!("label '{label}' produced no lines")))?;
        let m = line.metrics();
        Ok(GlyphMetrics {
            advance: f64::from(m.advance),
            ascent: f64::from(m.ascent),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/metrics.rs"]
mod tests;
