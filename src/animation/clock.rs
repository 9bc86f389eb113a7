use std::{cell::Cell, time::Duration, time::Instant};

/// Time source for the frame loop. `now` is monotonic time since the clock's origin.
pub trait Clock {
    fn now(&self) -> Duration;

    fn sleep(&self, duration: Duration);
}

/// Wall clock backed by [`Instant`].
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Virtual clock: `sleep` advances time instantly. Used for offline rendering.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get().saturating_add(by));
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) {
        self.advance(duration);
    }
}

/// Signal that resolves a fixed time after the animation started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Completion {
    started: Duration,
    deadline: Duration,
}

impl Completion {
    pub fn after(started: Duration, duration: Duration) -> Self {
        Self {
            started,
            deadline: started.saturating_add(duration),
        }
    }

    pub fn started(&self) -> Duration {
        self.started
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    pub fn is_resolved(&self, now: Duration) -> bool {
        now >= self.deadline
    }

    pub fn remaining(&self, now: Duration) -> Duration {
        self.deadline.saturating_sub(now)
    }

    /// Block on `clock` until the deadline.
    pub fn wait<C: Clock + ?Sized>(&self, clock: &C) {
        loop {
            let remaining = self.remaining(clock.now());
            if remaining.is_zero() {
                return;
            }
            clock.sleep(remaining);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
