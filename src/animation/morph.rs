//! One coordinated morph pass: every grapheme tween shares the pass start
//! time, so all entries advance together on each frame.

use std::{
    cell::Cell,
    rc::{Rc, Weak},
    time::Duration,
};

use crate::{
    animation::ease::Ease,
    animation::tween::{MorphState, Tween},
    foundation::core::Rect,
    foundation::error::MorphResult,
    render::bitmap::Bitmap,
    render::surface::{Surface, SurfaceLease},
};

/// Length of every morph pass, and of the wait the caller sees.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(280);

/// A grapheme's captured ink and where it travels.
#[derive(Debug)]
pub struct MorphEntry {
    pub source: Rect,
    pub target: Rect,
    pub bitmap: Bitmap,
}

/// Stops a running pass from outside. Cheap to clone.
///
/// Cancelling frees the surface at once; the pass itself notices on its next tick.
#[derive(Clone, Debug)]
pub struct CancelHandle {
    cancelled: Rc<Cell<bool>>,
    lease: Weak<SurfaceLease>,
}

impl CancelHandle {
    fn new(lease: &Rc<SurfaceLease>) -> Self {
        Self {
            cancelled: Rc::new(Cell::new(false)),
            lease: Rc::downgrade(lease),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let Some(lease) = self.lease.upgrade() {
            lease.release();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct FrameStats {
    pub frames: u64,
    /// Bitmap draws across all frames.
    pub draws: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Frame rendered, more to come.
    Continue { draws: usize },
    /// Final frame rendered (or the pass had already ended); stop scheduling.
    Finished { draws: usize },
    Cancelled,
}

impl FrameOutcome {
    pub fn is_final(self) -> bool {
        !matches!(self, Self::Continue { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stopped {
    Finished,
    Cancelled,
}

pub struct MorphPass {
    tweens: Vec<(Tween<MorphState>, Bitmap)>,
    started: Duration,
    duration: Duration,
    cancel: CancelHandle,
    lease: Rc<SurfaceLease>,
    stats: FrameStats,
    stopped: Option<Stopped>,
}

impl MorphPass {
    /// Claim `surface` and schedule a tween per entry from visible source to faded target.
    pub fn start(
        surface: &mut Surface,
        entries: Vec<MorphEntry>,
        now: Duration,
        ease: Ease,
    ) -> MorphResult<Self> {
        let lease = surface.claim()?;
        let tweens = entries
            .into_iter()
            .map(|e| {
                let tween = Tween::new(
                    MorphState::visible(e.source),
                    MorphState::faded(e.target),
                    ANIMATION_DURATION,
                    ease,
                );
                (tween, e.bitmap)
            })
            .collect::<Vec<_>>();
        tracing::debug!(entries = tweens.len(), "morph pass started");

        Ok(Self {
            tweens,
            started: now,
            duration: ANIMATION_DURATION,
            cancel: CancelHandle::new(&lease),
            lease,
            stats: FrameStats::default(),
            stopped: None,
        })
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.is_some()
    }

    pub fn deadline(&self) -> Duration {
        self.started.saturating_add(self.duration)
    }

    /// Interpolated state of every entry at `now`.
    pub fn states(&self, now: Duration) -> Vec<MorphState> {
        let elapsed = now.saturating_sub(self.started);
        self.tweens.iter().map(|(t, _)| t.sample(elapsed)).collect()
    }

    /// Render one frame: clear, advance every tween, redraw drawable entries.
    ///
    /// Entries whose current rect has no area are not drawn, but their opacity
    /// is still written to the surface.
    pub fn tick(&mut self, surface: &mut Surface, now: Duration) -> FrameOutcome {
        match self.stopped {
            Some(Stopped::Finished) => return FrameOutcome::Finished { draws: 0 },
            Some(Stopped::Cancelled) => return FrameOutcome::Cancelled,
            None => {}
        }
        if self.cancel.is_cancelled() {
            self.stop(Stopped::Cancelled);
            return FrameOutcome::Cancelled;
        }

        let elapsed = now.saturating_sub(self.started);
        surface.clear();
        let mut frame = Vec::with_capacity(self.tweens.len());
        for (tween, bitmap) in &self.tweens {
            let state = tween.sample(elapsed);
            surface.set_opacity(state.opacity);
            if state.rect.is_drawable() {
                frame.push((bitmap, state.rect));
            }
        }
        let draws = surface.draw_bitmaps(frame);
        self.stats.frames += 1;
        self.stats.draws += draws as u64;
        tracing::trace!(elapsed_ms = elapsed.as_millis() as u64, draws, "morph frame");

        if elapsed >= self.duration {
            self.stop(Stopped::Finished);
            FrameOutcome::Finished { draws }
        } else {
            FrameOutcome::Continue { draws }
        }
    }

    /// End the pass without rendering another frame.
    pub fn finish(&mut self) {
        if self.stopped.is_none() {
            self.stop(Stopped::Finished);
        }
    }

    fn stop(&mut self, why: Stopped) {
        self.stopped = Some(why);
        self.lease.release();
        tracing::debug!(
            ?why,
            frames = self.stats.frames,
            draws = self.stats.draws,
            "morph pass stopped"
        );
    }
}

impl std::fmt::Debug for MorphPass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MorphPass")
            .field("entries", &self.tweens.len())
            .field("started", &self.started)
            .field("stats", &self.stats)
            .field("stopped", &self.stopped)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/morph.rs"]
mod tests;
