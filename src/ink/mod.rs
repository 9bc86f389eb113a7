//! Ink as captured and recognized: strokes, predictions, and the host seams
//! that feed a morph.

/// Recognition-to-text handoff.
pub mod flow;
/// Layout snapshots supplied by the host.
pub mod host;
pub mod model;
pub mod recognizer;
