// SPDX-License-Identifier: MPL-2.0
//! Visual easing of the handle towards its snapped resting position.
//!
//! The animation only affects where the handle is drawn. The logical
//! position is committed immediately on release.

use crate::domain::SnapDuration;
use std::time::{Duration, Instant};

/// A running ease-out from one handle position to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapAnimation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl SnapAnimation {
    /// Starts an animation at `now`, or returns `None` when there is
    /// nothing to animate.
    #[must_use]
    pub fn start(from: f32, to: f32, duration: SnapDuration, now: Instant) -> Option<Self> {
        if duration.is_instant() || (from - to).abs() < f32::EPSILON {
            return None;
        }
        Some(Self {
            from,
            to,
            started: now,
            duration: duration.as_duration(),
        })
    }

    /// Fraction of the duration elapsed at `now`, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Handle position at `now`.
    #[must_use]
    pub fn position_at(&self, now: Instant) -> f32 {
        let t = ease_out_cubic(self.progress(now));
        self.from + (self.to - self.from) * t
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
