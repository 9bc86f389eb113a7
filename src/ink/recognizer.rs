//! Seams to the handwriting recognizer. Recognition itself happens elsewhere;
//! this crate only consumes drawings and predictions through these traits.

use crate::{
    foundation::error::MorphResult,
    ink::model::{Drawing, Prediction, Stroke},
};

/// Pointer kind the ink was captured with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Mouse,
    Touch,
    Pen,
}

impl InputType {
    /// Maps a host pointer type; unknown kinds give no hint at all.
    pub fn from_pointer_type(pointer_type: &str) -> Option<Self> {
        match pointer_type {
            "mouse" => Some(Self::Mouse),
            "touch" => Some(Self::Touch),
            "pen" => Some(Self::Pen),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionHints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recognition_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_context: Option<String>,
    #[serde(default)]
    pub alternatives: u32,
}

pub trait Recognizer {
    fn start_drawing(&mut self, hints: &RecognitionHints) -> MorphResult<Box<dyn DrawingSession>>;
}

/// One recognition attempt. The first prediction is the best match.
pub trait DrawingSession {
    fn add_stroke(&mut self, stroke: Stroke);

    fn drawing(&self) -> &Drawing;

    fn get_prediction(&mut self) -> MorphResult<Vec<Prediction>>;

    fn clear(&mut self);
}

/// Recognizer that answers every session with a fixed prediction list.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRecognizer {
    predictions: Vec<Prediction>,
}

impl ScriptedRecognizer {
    pub fn new(predictions: Vec<Prediction>) -> Self {
        Self { predictions }
    }
}

impl Recognizer for ScriptedRecognizer {
    fn start_drawing(&mut self, hints: &RecognitionHints) -> MorphResult<Box<dyn DrawingSession>> {
        tracing::debug!(?hints, "scripted drawing session started");
        Ok(Box::new(ScriptedSession {
            drawing: Drawing::default(),
            predictions: self.predictions.clone(),
        }))
    }
}

#[derive(Clone, Debug)]
pub struct ScriptedSession {
    drawing: Drawing,
    predictions: Vec<Prediction>,
}

impl ScriptedSession {
    pub fn new(drawing: Drawing, predictions: Vec<Prediction>) -> Self {
        Self {
            drawing,
            predictions,
        }
    }
}

impl DrawingSession for ScriptedSession {
    fn add_stroke(&mut self, stroke: Stroke) {
        self.drawing.add_stroke(stroke);
    }

    fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    fn get_prediction(&mut self) -> MorphResult<Vec<Prediction>> {
        if self.drawing.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.predictions.clone())
    }

    fn clear(&mut self) {
        self.drawing = Drawing::default();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ink/recognizer.rs"]
mod tests;
