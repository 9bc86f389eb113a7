//! Entry point of the morph: turns a prediction plus the ink that produced it
//! into a running pass and a completion signal for the caller.

use std::time::Duration;

use crate::{
    animation::clock::{Clock, Completion},
    animation::driver::FrameDriver,
    animation::morph::{
        ANIMATION_DURATION, CancelHandle, FrameOutcome, FrameStats, MorphEntry, MorphPass,
    },
    config::MorphConfig,
    foundation::core::FontSpec,
    foundation::error::{MorphError, MorphResult},
    ink::model::{AnimationData, Drawing, Prediction},
    layout::engine::LayoutEngine,
    layout::metrics::GlyphMeasure,
    render::region,
    render::surface::Surface,
};

/// A started pass together with the caller-facing completion signal.
///
/// The completion resolves [`ANIMATION_DURATION`] after the start, whether or
/// not the pass is still rendering.
#[derive(Debug)]
pub struct AnimationHandle {
    pass: MorphPass,
    completion: Completion,
    cancel: CancelHandle,
}

impl AnimationHandle {
    pub fn completion(&self) -> Completion {
        self.completion
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn pass(&self) -> &MorphPass {
        &self.pass
    }

    /// Render the frame due at `now`.
    pub fn tick(&mut self, surface: &mut Surface, now: Duration) -> FrameOutcome {
        self.pass.tick(surface, now)
    }

    /// Run the pass to the end on `clock`, returning once the completion resolves.
    pub fn drive<C: Clock + ?Sized>(
        &mut self,
        clock: &C,
        surface: &mut Surface,
        frame_interval: Duration,
    ) -> FrameStats {
        FrameDriver::new(clock, frame_interval).run(&mut self.pass, surface, self.completion)
    }

    pub fn drive_with<C, F>(
        &mut self,
        clock: &C,
        surface: &mut Surface,
        frame_interval: Duration,
        on_frame: F,
    ) -> FrameStats
    where
        C: Clock + ?Sized,
        F: FnMut(&Surface, u64),
    {
        FrameDriver::new(clock, frame_interval).run_with(
            &mut self.pass,
            surface,
            self.completion,
            on_frame,
        )
    }
}

pub struct AnimationCoordinator<M> {
    layout: LayoutEngine<M>,
    config: MorphConfig,
}

impl<M: GlyphMeasure> AnimationCoordinator<M> {
    pub fn new(measure: M, config: MorphConfig) -> Self {
        let layout = LayoutEngine::new(measure).with_glyph_label(config.glyph_label.clone());
        Self { layout, config }
    }

    pub fn config(&self) -> &MorphConfig {
        &self.config
    }

    pub fn layout_engine(&self) -> &LayoutEngine<M> {
        &self.layout
    }

    pub fn layout_engine_mut(&mut self) -> &mut LayoutEngine<M> {
        &mut self.layout
    }

    /// Lay out `text_context + prediction.text`, snapshot the ink of every
    /// segment and start the morph pass on `surface` at `now`.
    ///
    /// With no segments the pass has nothing to draw, yet the completion
    /// still resolves after the full duration.
    #[tracing::instrument(
        skip_all,
        fields(
            text = %prediction.text,
            segments = prediction.segments().len(),
            font_size = animation_data.font_size,
        )
    )]
    pub fn animate(
        &mut self,
        text_context: &str,
        prediction: &Prediction,
        drawing: &Drawing,
        surface: &mut Surface,
        animation_data: &AnimationData,
        now: Duration,
    ) -> MorphResult<AnimationHandle> {
        animation_data.validate()?;
        if surface.is_busy() {
            return Err(MorphError::busy("a morph pass is already running on this surface"));
        }

        let font = FontSpec::new(self.config.font_family.clone(), animation_data.font_size)?;
        surface.set_font(font.clone());
        if self.layout.set_font(font) {
            tracing::debug!("font changed; glyph metrics invalidated");
        }

        let full_text = format!("{text_context}{}", prediction.text);
        let positions = self.layout.layout(&full_text, animation_data.wrap_width())?;
        let context_len = text_context.chars().count();
        let predicted_len = prediction.text.chars().count();

        let segments = prediction.segments();
        let mut entries = Vec::with_capacity(segments.len());
        for segment in segments {
            segment.validate(predicted_len)?;
            let ink = region::extract(surface, drawing, &segment.drawing_segments)?;
            let target =
                self.layout
                    .target_rect(&positions, context_len, segment, animation_data)?;
            tracing::trace!(
                grapheme = %segment.grapheme,
                source = ?ink.source,
                ?target,
                "segment mapped"
            );
            entries.push(MorphEntry {
                source: ink.source,
                target,
                bitmap: ink.bitmap,
            });
        }

        let pass = MorphPass::start(surface, entries, now, self.config.ease)?;
        let completion = Completion::after(now, ANIMATION_DURATION);
        Ok(AnimationHandle {
            cancel: pass.cancel_handle(),
            pass,
            completion,
        })
    }

    /// [`Self::animate`] at `clock.now()`, then drive the pass until the completion resolves.
    pub fn run<C: Clock + ?Sized>(
        &mut self,
        clock: &C,
        text_context: &str,
        prediction: &Prediction,
        drawing: &Drawing,
        surface: &mut Surface,
        animation_data: &AnimationData,
    ) -> MorphResult<FrameStats> {
        let mut handle = self.animate(
            text_context,
            prediction,
            drawing,
            surface,
            animation_data,
            clock.now(),
        )?;
        Ok(handle.drive(clock, surface, self.config.frame_interval()))
    }
}

impl<M> std::fmt::Debug for AnimationCoordinator<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationCoordinator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../tests/unit/coordinator.rs"]
mod tests;
