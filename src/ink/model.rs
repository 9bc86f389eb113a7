use crate::foundation::error::{MorphError, MorphResult};

/// One sampled ink coordinate, `t` in milliseconds since the stroke started.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub t: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64, t: f64) -> Self {
        Self { x, y, t }
    }
}

/// A continuous ink path. Points are append-only.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in `begin..=end`, clipped to what the stroke actually has.
    pub fn point_range(&self, begin: usize, end: usize) -> &[Point] {
        if begin > end || begin >= self.points.len() {
            return &[];
        }
        let end = end.min(self.points.len() - 1);
        &self.points[begin..=end]
    }
}

/// Every stroke captured for one recognition attempt.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Drawing {
    pub strokes: Vec<Stroke>,
}

impl Drawing {
    pub fn new(strokes: Vec<Stroke>) -> Self {
        Self { strokes }
    }

    pub fn add_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub fn stroke(&self, index: usize) -> Option<&Stroke> {
        self.strokes.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.iter().all(Stroke::is_empty)
    }
}

/// Inclusive point range of one stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingSegment {
    pub stroke_index: usize,
    pub begin_point_index: usize,
    pub end_point_index: usize,
}

/// Maps the grapheme at `begin_index..end_index` of the predicted text to its ink.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub grapheme: String,
    pub begin_index: usize,
    pub end_index: usize,
    #[serde(default)]
    pub drawing_segments: Vec<DrawingSegment>,
}

impl Segment {
    pub fn span(&self) -> usize {
        self.end_index.saturating_sub(self.begin_index)
    }

    pub fn validate(&self, predicted_len: usize) -> MorphResult<()> {
        if self.begin_index > self.end_index {
            return Err(MorphError::validation(format!(
                "segment '{}' begin_index {} > end_index {}",
                self.grapheme, self.begin_index, self.end_index
            )));
        }
        if self.end_index > predicted_len {
            return Err(MorphError::validation(format!(
                "segment '{}' end_index {} exceeds predicted text length {}",
                self.grapheme, self.end_index, predicted_len
            )));
        }
        Ok(())
    }
}

/// Recognizer output: best-guess text plus optional per-grapheme segmentation.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segmentation_result: Option<Vec<Segment>>,
}

impl Prediction {
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            segmentation_result: None,
        }
    }

    /// Segments to animate; absent and empty segmentation both yield `&[]`.
    pub fn segments(&self) -> &[Segment] {
        self.segmentation_result.as_deref().unwrap_or(&[])
    }
}

/// Host-supplied layout snapshot for one animation call.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationData {
    #[serde(alias = "width")]
    pub canvas_width: f64,
    pub padding: f64,
    #[serde(default)]
    pub scroll_top: f64,
    #[serde(with = "css_px")]
    pub font_size: f32,
}

impl AnimationData {
    /// Width available to text: the canvas minus padding on both sides.
    /// Some hosts subtract the padding only once; both sides come off here.
    pub fn wrap_width(&self) -> f64 {
        (self.canvas_width - 2.0 * self.padding).max(0.0)
    }

    pub fn validate(&self) -> MorphResult<()> {
        if !self.canvas_width.is_finite() || self.canvas_width < 0.0 {
            return Err(MorphError::validation(
                "animation data canvas_width must be finite and >= 0",
            ));
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(MorphError::validation(
                "animation data padding must be finite and >= 0",
            ));
        }
        if !self.scroll_top.is_finite() {
            return Err(MorphError::validation(
                "animation data scroll_top must be finite",
            ));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(MorphError::validation(
                "animation data font_size must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// Font sizes arrive either as plain numbers or as CSS lengths like `"16px"`.
mod css_px {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f32),
        Css(String),
    }

    pub fn serialize<S: Serializer>(v: &f32, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f32(*v)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f32, D::Error> {
        match Raw::deserialize(d)? {
            Raw::Number(v) => Ok(v),
            Raw::Css(s) => {
                let trimmed = s.trim();
                let digits = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
                digits
                    .parse::<f32>()
                    .map_err(|_| D::Error::custom(format!("invalid css pixel length '{s}'")))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ink/model.rs"]
mod tests;
