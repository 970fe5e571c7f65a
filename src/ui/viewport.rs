// SPDX-License-Identifier: MPL-2.0
//! Viewport-relative units.
//!
//! Picker dimensions are configured as percentages of the window, the way
//! CSS `vw`/`vh` units work.

use iced::Size;

/// Window size the picker lays itself out against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 650.0;

    /// Creates a viewport; non-positive dimensions are replaced by the default.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        let sanitize = |value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };
        Self {
            width: sanitize(width, Self::DEFAULT_WIDTH),
            height: sanitize(height, Self::DEFAULT_HEIGHT),
        }
    }

    #[must_use]
    pub fn width(self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> f32 {
        self.height
    }

    /// `percent` of the viewport width.
    #[must_use]
    pub fn vw(self, percent: f32) -> f32 {
        self.width * percent / 100.0
    }

    /// `percent` of the viewport height.
    #[must_use]
    pub fn vh(self, percent: f32) -> f32 {
        self.height * percent / 100.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

impl From<Size> for Viewport {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn units_are_percentages() {
        let viewport = Viewport::new(400.0, 200.0);
        assert_abs_diff_eq!(viewport.vw(85.0), 340.0);
        assert_abs_diff_eq!(viewport.vh(1.0), 2.0);
    }

    #[test]
    fn invalid_sizes_fall_back() {
        let viewport = Viewport::new(0.0, f32::NAN);
        assert_eq!(viewport, Viewport::default());
    }

    #[test]
    fn converts_from_window_size() {
        let viewport = Viewport::from(Size::new(1024.0, 768.0));
        assert_abs_diff_eq!(viewport.width(), 1024.0);
        assert_abs_diff_eq!(viewport.height(), 768.0);
    }
}
