// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the picker. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: Range and starting value
//! - **Track**: Viewport-relative track dimensions
//! - **Handle**: Cursor dimensions and border
//! - **Typography**: Label and scale number sizes
//! - **Gesture**: Vertical tolerance and snap animation
//! - **Tick Scale**: Conditions under which ticks are drawn

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Upper end of the scale when none (or zero) is configured.
pub const DEFAULT_MAX_VALUE: u32 = 10;

/// Largest accepted upper end; bigger scales are clamped to it.
pub const MAX_MAX_VALUE: u32 = 1000;

/// Starting value when none is configured, or the configured one is invalid.
pub const DEFAULT_VALUE: u32 = 5;

// ==========================================================================
// Track Defaults
// ==========================================================================

/// Track width as a percentage of the viewport width.
pub const DEFAULT_WIDTH_PERCENT: f32 = 85.0;

/// Track height as a percentage of the viewport height.
pub const DEFAULT_HEIGHT_PERCENT: f32 = 1.0;

/// Upper bound for any viewport percentage setting.
pub const MAX_VIEWPORT_PERCENT: f32 = 100.0;

/// Corner radius of the track and fill (fully rounded on small heights).
pub const TRACK_RADIUS: f32 = 50.0;

// ==========================================================================
// Handle Defaults
// ==========================================================================

/// Handle diameter as a percentage of the viewport width.
pub const DEFAULT_HANDLE_PERCENT: f32 = 6.0;

/// Handle border width in pixels.
pub const DEFAULT_HANDLE_BORDER_WIDTH: f32 = 1.0;

// ==========================================================================
// Typography Defaults
// ==========================================================================

/// Font size of the min/mid/max labels.
pub const DEFAULT_LABEL_FONT_SIZE: f32 = 28.0;

/// Font size of the scale numbers.
pub const DEFAULT_NUMBER_FONT_SIZE: f32 = 24.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Vertical drift (in pixels) tolerated before horizontal movement freezes.
pub const DEFAULT_TOLERANCE_MARGIN: f32 = 50.0;

/// Duration of the release-time snapping animation.
pub const DEFAULT_SNAP_ANIMATION_MS: u32 = 120;

/// Longest snapping animation accepted from configuration.
pub const MAX_SNAP_ANIMATION_MS: u32 = 2_000;

// ==========================================================================
// Tick Scale Limits
// ==========================================================================

/// Ticks (separators and numbers) are suppressed above this many steps.
pub const TICK_SCALE_MAX_VALUE: u32 = 10;

/// Ticks are suppressed when the track is this narrow or narrower.
pub const TICK_SCALE_MIN_WIDTH_PERCENT: f32 = 50.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_MAX_VALUE > 0);
    assert!(DEFAULT_VALUE <= DEFAULT_MAX_VALUE);
    assert!(DEFAULT_MAX_VALUE <= MAX_MAX_VALUE);
    assert!(TICK_SCALE_MAX_VALUE <= MAX_MAX_VALUE);

    assert!(DEFAULT_WIDTH_PERCENT > 0.0);
    assert!(DEFAULT_WIDTH_PERCENT <= MAX_VIEWPORT_PERCENT);
    assert!(DEFAULT_HEIGHT_PERCENT > 0.0);
    assert!(DEFAULT_HEIGHT_PERCENT <= MAX_VIEWPORT_PERCENT);
    assert!(DEFAULT_HANDLE_PERCENT > 0.0);
    assert!(DEFAULT_HANDLE_PERCENT <= MAX_VIEWPORT_PERCENT);

    assert!(DEFAULT_TOLERANCE_MARGIN > 0.0);
    assert!(DEFAULT_SNAP_ANIMATION_MS <= MAX_SNAP_ANIMATION_MS);

    // The default layout must show ticks when asked to.
    assert!(DEFAULT_MAX_VALUE <= TICK_SCALE_MAX_VALUE);
    assert!(DEFAULT_WIDTH_PERCENT > TICK_SCALE_MIN_WIDTH_PERCENT);
};
