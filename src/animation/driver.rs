use std::time::Duration;

use crate::{
    animation::clock::{Clock, Completion},
    animation::morph::{FrameStats, MorphPass},
    render::surface::Surface,
};

/// One display refresh at 60 Hz.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_nanos(16_666_667);

/// Cooperative run loop: ticks a pass once per frame interval until it stops,
/// then holds until the completion signal resolves.
pub struct FrameDriver<'c, C: Clock + ?Sized> {
    clock: &'c C,
    frame_interval: Duration,
}

impl<'c, C: Clock + ?Sized> FrameDriver<'c, C> {
    pub fn new(clock: &'c C, frame_interval: Duration) -> Self {
        let frame_interval = if frame_interval.is_zero() {
            DEFAULT_FRAME_INTERVAL
        } else {
            frame_interval
        };
        Self {
            clock,
            frame_interval,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub fn run(
        &self,
        pass: &mut MorphPass,
        surface: &mut Surface,
        completion: Completion,
    ) -> FrameStats {
        self.run_with(pass, surface, completion, |_, _| {})
    }

    /// Like [`FrameDriver::run`], calling `on_frame(surface, frame_index)` after every rendered frame.
    #[tracing::instrument(skip_all, fields(deadline_ms = completion.deadline().as_millis() as u64))]
    pub fn run_with<F>(
        &self,
        pass: &mut MorphPass,
        surface: &mut Surface,
        completion: Completion,
        mut on_frame: F,
    ) -> FrameStats
    where
        F: FnMut(&Surface, u64),
    {
        let mut frame = 0u64;
        loop {
            let before = pass.stats().frames;
            let outcome = pass.tick(surface, self.clock.now());
            if pass.stats().frames > before {
                on_frame(surface, frame);
                frame += 1;
            }
            if outcome.is_final() {
                break;
            }

            let remaining = completion.remaining(self.clock.now());
            if remaining.is_zero() {
                break;
            }
            self.clock.sleep(self.frame_interval.min(remaining));
        }

        // Host timer: the caller's wait is fixed whatever the loop did.
        completion.wait(self.clock);
        pass.finish();
        pass.stats()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/driver.rs"]
mod tests;
