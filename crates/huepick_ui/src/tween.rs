//! Time-based interpolation of controller values
//!
//! Cosmetic transitions (a thumb squeezing on press) are expressed as a
//! [`Tween`] from the current value to a target. [`TweenedValue`] advances a
//! tween on each frame tick and writes the result into a
//! [`ValueController`], so observers see animation frames the same way they
//! see any other change.

use std::time::Duration;
use web_time::Instant;

use crate::controller::ValueController;

/// Easing curve applied to linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Cubic ease-out: fast start, gentle finish
    #[default]
    EaseOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` through the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// A single interpolation between two values over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start: Instant,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, start: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Linear progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Interpolated value at `now`.
    pub fn value_at(&self, now: Instant) -> f32 {
        let t = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * t
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// A controller whose value can be animated toward a target.
#[derive(Debug)]
pub struct TweenedValue {
    controller: ValueController,
    active: Option<Tween>,
}

impl TweenedValue {
    pub fn new(controller: ValueController) -> Self {
        Self {
            controller,
            active: None,
        }
    }

    /// The underlying controller.
    pub fn controller(&self) -> &ValueController {
        &self.controller
    }

    pub fn value(&self) -> f32 {
        self.controller.value()
    }

    /// Whether a tween is still running.
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Start animating from the current value to `target`.
    ///
    /// Replaces any running tween. A zero duration jumps immediately.
    pub fn animate_to(&mut self, target: f32, duration: Duration, now: Instant) {
        let tween = Tween::new(self.controller.value(), target, now, duration);
        if tween.is_finished(now) {
            self.active = None;
            self.controller.set(target);
        } else {
            self.active = Some(tween);
        }
    }

    /// Advance the running tween to `now`.
    ///
    /// Returns `true` while more frames are needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(tween) = self.active else {
            return false;
        };
        if tween.is_finished(now) {
            self.active = None;
            self.controller.set(tween.to);
            false
        } else {
            self.controller.set(tween.value_at(now));
            true
        }
    }

    /// Cancel the running tween and hold the current value.
    pub fn stop(&mut self) {
        self.active = None;
    }
}
