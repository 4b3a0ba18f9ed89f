//! Timed single-value transitions
//!
//! A [`Tween`] interpolates one value from a start to an end over a fixed
//! duration. The owner advances it with [`Tween::tick`] from its frame loop
//! and reads [`Tween::value`] after each tick.

use crate::easing::Easing;

#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration_ms: u32,
    elapsed_ms: f32,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            elapsed_ms: 0.0,
            easing,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Linear time progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Get the current interpolated value
    pub fn value(&self) -> f32 {
        let eased = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }

    /// Advance by `dt_ms` milliseconds. Returns true while still running.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if self.is_finished() {
            return false;
        }
        self.elapsed_ms = (self.elapsed_ms + dt_ms.max(0.0)).min(self.duration_ms as f32);
        !self.is_finished()
    }

    /// Jump to the end value
    pub fn finish(&mut self) {
        self.elapsed_ms = self.duration_ms as f32;
    }
}
