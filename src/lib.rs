//! Inkmorph turns handwritten ink into recognized text with a short morph.
//!
//! Once a recognizer has segmented a drawing into graphemes, each grapheme's
//! ink is captured from the canvas and tweened from where it was drawn to the
//! cell its text will occupy, fading out as it goes.
//!
//! # Pipeline overview
//!
//! 1. **Layout**: `text_context + prediction` is wrapped character by character
//!    into a monospace grid ([`LayoutEngine`]).
//! 2. **Extract**: the ink of every segment is bounded and copied out of the
//!    surface at device resolution ([`render::region`]).
//! 3. **Animate**: a [`MorphPass`] redraws every snapshot each frame along an
//!    `OutQuad` curve; the caller waits a fixed [`ANIMATION_DURATION`].
//!
//! [`AnimationCoordinator::animate`] is the entry point that chains all three.
#![forbid(unsafe_code)]

pub mod animation;
pub mod config;
pub mod coordinator;
pub mod foundation;
pub mod ink;
pub mod layout;
pub mod render;

pub use animation::clock::{Clock, Completion, ManualClock, SystemClock};
pub use animation::driver::{DEFAULT_FRAME_INTERVAL, FrameDriver};
pub use animation::ease::Ease;
pub use animation::morph::{
    ANIMATION_DURATION, CancelHandle, FrameOutcome, FrameStats, MorphEntry, MorphPass,
};
pub use animation::tween::{MorphState, Tween};
pub use config::MorphConfig;
pub use coordinator::{AnimationCoordinator, AnimationHandle};
pub use foundation::core::{DeviceRect, FontSpec, Rect, Rgba8};
pub use foundation::error::{MorphError, MorphResult};
pub use ink::flow::recognize_and_animate;
pub use ink::host::{AnimationDataSource, StaticHost};
pub use ink::model::{
    AnimationData, Drawing, DrawingSegment, Point, Prediction, Segment, Stroke,
};
pub use ink::recognizer::{
    DrawingSession, InputType, RecognitionHints, Recognizer, ScriptedRecognizer, ScriptedSession,
};
pub use layout::engine::{CharacterPosition, LayoutEngine, PositionMap};
pub use layout::metrics::{GlyphMeasure, GlyphMetrics, MonospaceRatio, ParleyMeasure};
pub use render::bitmap::Bitmap;
pub use render::region::InkRegion;
pub use render::surface::{InkStyle, Surface};
