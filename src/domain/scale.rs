// SPDX-License-Identifier: MPL-2.0
//! Scale and gesture value objects.
//!
//! Every constructor here accepts raw (possibly nonsensical) input and
//! silently corrects it, so callers never have to handle a failure.

use crate::config::defaults::{
    DEFAULT_MAX_VALUE, DEFAULT_SNAP_ANIMATION_MS, DEFAULT_TOLERANCE_MARGIN, DEFAULT_VALUE,
    MAX_MAX_VALUE, MAX_SNAP_ANIMATION_MS, MAX_VIEWPORT_PERCENT, TICK_SCALE_MAX_VALUE,
};
use std::time::Duration;

// =============================================================================
// MaxValue
// =============================================================================

/// Upper end of the integer scale `[0, max]`, guaranteed to be in
/// `1..=MAX_MAX_VALUE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxValue(u32);

impl MaxValue {
    /// Creates a max value; zero falls back to the default of 10 and values
    /// above [`MAX_MAX_VALUE`] are clamped to it.
    #[must_use]
    pub fn new(raw: u32) -> Self {
        match raw {
            0 => Self(DEFAULT_MAX_VALUE),
            raw if raw > MAX_MAX_VALUE => {
                log::warn!("max value {raw} is too large, clamping to {MAX_MAX_VALUE}");
                Self(MAX_MAX_VALUE)
            }
            raw => Self(raw),
        }
    }

    /// Returns the raw value.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Returns the value as `f32` for offset arithmetic.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // scales are small, far below 2^24
    pub fn as_f32(self) -> f32 {
        self.0 as f32
    }

    /// Whether a scale this long is short enough to draw ticks for.
    #[must_use]
    pub fn allows_tick_scale(self) -> bool {
        self.0 <= TICK_SCALE_MAX_VALUE
    }

    /// Resolves the starting value from raw configuration input.
    ///
    /// Values above `max` are capped to `max`. Missing, non-finite or
    /// negative input falls back to the default value, itself capped at
    /// `max`. Fractions round to the nearest step.
    #[must_use]
    pub fn resolve_default(self, raw: Option<f64>) -> u32 {
        let max = f64::from(self.0);
        let fallback = DEFAULT_VALUE.min(self.0);

        match raw {
            Some(value) if value.is_finite() && value > max => self.0,
            Some(value) if value.is_finite() && value >= 0.0 => {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                // value is within [0, max] and max fits in u32
                let rounded = value.round() as u32;
                rounded.min(self.0)
            }
            _ => fallback,
        }
    }
}

impl Default for MaxValue {
    fn default() -> Self {
        Self(DEFAULT_MAX_VALUE)
    }
}

// =============================================================================
// ViewportPercent
// =============================================================================

/// A percentage of the viewport, guaranteed to be in `(0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportPercent(f32);

impl ViewportPercent {
    /// Creates a percentage; non-positive or non-finite input uses `fallback`.
    #[must_use]
    pub fn new(raw: Option<f32>, fallback: f32) -> Self {
        match raw {
            Some(value) if value.is_finite() && value > 0.0 => {
                Self(value.min(MAX_VIEWPORT_PERCENT))
            }
            _ => Self(fallback),
        }
    }

    /// Returns the raw percentage.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

// =============================================================================
// ToleranceMargin
// =============================================================================

/// Maximum vertical drift tolerated during a horizontal drag.
///
/// `None` means vertical movement is never checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceMargin(Option<f32>);

impl ToleranceMargin {
    /// Resolves the margin from raw configuration input.
    ///
    /// Missing or zero input uses the default of 50 px; negative or NaN input
    /// disables the check entirely.
    #[must_use]
    pub fn from_config(raw: Option<f32>) -> Self {
        match raw {
            None => Self(Some(DEFAULT_TOLERANCE_MARGIN)),
            Some(value) if value == 0.0 => Self(Some(DEFAULT_TOLERANCE_MARGIN)),
            Some(value) if value.is_nan() || value < 0.0 => Self(None),
            Some(value) => Self(Some(value)),
        }
    }

    /// A margin that never freezes movement.
    #[must_use]
    pub fn disabled() -> Self {
        Self(None)
    }

    /// Returns the margin in pixels, if enabled.
    #[must_use]
    pub fn get(self) -> Option<f32> {
        self.0
    }

    /// Whether a vertical gesture delta leaves the tolerated band.
    #[must_use]
    pub fn is_exceeded(self, dy: f32) -> bool {
        match self.0 {
            Some(margin) => dy > margin || dy < -margin,
            None => false,
        }
    }
}

impl Default for ToleranceMargin {
    fn default() -> Self {
        Self(Some(DEFAULT_TOLERANCE_MARGIN))
    }
}

// =============================================================================
// SnapDuration
// =============================================================================

/// Duration of the release-time snapping animation, capped at 2 seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapDuration(u32);

impl SnapDuration {
    /// Creates a duration in milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u32) -> Self {
        Self(millis.min(MAX_SNAP_ANIMATION_MS))
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub fn millis(self) -> u32 {
        self.0
    }

    /// Whether snapping happens without animation.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0 == 0
    }

    /// Returns the value as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for SnapDuration {
    fn default() -> Self {
        Self(DEFAULT_SNAP_ANIMATION_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_value_zero_falls_back_to_default() {
        assert_eq!(MaxValue::new(0).get(), DEFAULT_MAX_VALUE);
        assert_eq!(MaxValue::new(7).get(), 7);
    }

    #[test]
    fn max_value_is_clamped_to_upper_bound() {
        assert_eq!(MaxValue::new(MAX_MAX_VALUE).get(), MAX_MAX_VALUE);
        assert_eq!(MaxValue::new(MAX_MAX_VALUE + 1).get(), MAX_MAX_VALUE);
        assert_eq!(MaxValue::new(4_000_000_000).get(), MAX_MAX_VALUE);
    }

    #[test]
    fn tick_scale_is_allowed_up_to_ten() {
        assert!(MaxValue::new(10).allows_tick_scale());
        assert!(!MaxValue::new(11).allows_tick_scale());
    }

    #[test]
    fn resolve_default_accepts_in_range_values() {
        let max = MaxValue::new(10);
        assert_eq!(max.resolve_default(Some(0.0)), 0);
        assert_eq!(max.resolve_default(Some(7.0)), 7);
        assert_eq!(max.resolve_default(Some(10.0)), 10);
    }

    #[test]
    fn resolve_default_rounds_fractions() {
        let max = MaxValue::new(10);
        assert_eq!(max.resolve_default(Some(3.4)), 3);
        assert_eq!(max.resolve_default(Some(3.6)), 4);
    }

    #[test]
    fn resolve_default_rejects_invalid_input() {
        let max = MaxValue::new(10);
        assert_eq!(max.resolve_default(None), DEFAULT_VALUE);
        assert_eq!(max.resolve_default(Some(f64::NAN)), DEFAULT_VALUE);
        assert_eq!(max.resolve_default(Some(-1.0)), DEFAULT_VALUE);
        assert_eq!(max.resolve_default(Some(f64::INFINITY)), DEFAULT_VALUE);
    }

    #[test]
    fn resolve_default_caps_values_above_max() {
        let max = MaxValue::new(10);
        assert_eq!(max.resolve_default(Some(11.0)), 10);
        assert_eq!(max.resolve_default(Some(250.0)), 10);
    }

    #[test]
    fn resolve_default_never_exceeds_max() {
        // Both the out-of-range value and the fallback are capped.
        let max = MaxValue::new(3);
        assert_eq!(max.resolve_default(Some(12.0)), 3);
        assert_eq!(max.resolve_default(None), 3);
    }

    #[test]
    fn viewport_percent_corrects_invalid_input() {
        assert_eq!(ViewportPercent::new(None, 85.0).value(), 85.0);
        assert_eq!(ViewportPercent::new(Some(0.0), 85.0).value(), 85.0);
        assert_eq!(ViewportPercent::new(Some(-4.0), 85.0).value(), 85.0);
        assert_eq!(ViewportPercent::new(Some(f32::NAN), 85.0).value(), 85.0);
        assert_eq!(ViewportPercent::new(Some(250.0), 85.0).value(), 100.0);
        assert_eq!(ViewportPercent::new(Some(40.0), 85.0).value(), 40.0);
    }

    #[test]
    fn tolerance_margin_defaults_on_missing_or_zero() {
        assert_eq!(
            ToleranceMargin::from_config(None).get(),
            Some(DEFAULT_TOLERANCE_MARGIN)
        );
        assert_eq!(
            ToleranceMargin::from_config(Some(0.0)).get(),
            Some(DEFAULT_TOLERANCE_MARGIN)
        );
    }

    #[test]
    fn tolerance_margin_is_disabled_by_malformed_input() {
        assert_eq!(ToleranceMargin::from_config(Some(-5.0)).get(), None);
        assert_eq!(ToleranceMargin::from_config(Some(f32::NAN)).get(), None);
    }

    #[test]
    fn tolerance_margin_checks_both_directions() {
        let margin = ToleranceMargin::from_config(Some(20.0));
        assert!(!margin.is_exceeded(20.0));
        assert!(!margin.is_exceeded(-20.0));
        assert!(margin.is_exceeded(20.5));
        assert!(margin.is_exceeded(-20.5));
        assert!(!ToleranceMargin::disabled().is_exceeded(10_000.0));
    }

    #[test]
    fn snap_duration_clamps_to_max() {
        assert_eq!(SnapDuration::from_millis(50_000).millis(), MAX_SNAP_ANIMATION_MS);
        assert!(SnapDuration::from_millis(0).is_instant());
        assert_eq!(
            SnapDuration::from_millis(250).as_duration(),
            Duration::from_millis(250)
        );
    }
}
