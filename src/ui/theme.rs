// SPDX-License-Identifier: MPL-2.0
//! Conversions from configuration values to iced styling types.

use crate::domain::{FontWeight, Rgba};
use iced::font::Weight;
use iced::{Color, Font};

/// Converts a configured color to an iced color.
#[must_use]
pub fn color(rgba: Rgba) -> Color {
    let [r, g, b, a] = rgba.to_f32_array();
    Color { r, g, b, a }
}

/// Configured color or `fallback`.
#[must_use]
pub fn color_or(rgba: Option<Rgba>, fallback: Color) -> Color {
    rgba.map_or(fallback, color)
}

/// Default font with the configured weight.
#[must_use]
pub fn font(weight: FontWeight) -> Font {
    let weight = match weight {
        FontWeight::Thin => Weight::Thin,
        FontWeight::Light => Weight::Light,
        FontWeight::Normal => Weight::Normal,
        FontWeight::Medium => Weight::Medium,
        FontWeight::Semibold => Weight::Semibold,
        FontWeight::Bold => Weight::Bold,
        FontWeight::Black => Weight::Black,
    };
    Font {
        weight,
        ..Font::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::design_tokens::palette;

    #[test]
    fn converts_channels() {
        let converted = color(Rgba::opaque(255, 0, 51));
        assert_abs_diff_eq!(converted.r, 1.0);
        assert_abs_diff_eq!(converted.g, 0.0);
        assert_abs_diff_eq!(converted.b, 0.2);
        assert_abs_diff_eq!(converted.a, 1.0);
    }

    #[test]
    fn color_or_falls_back() {
        assert_eq!(color_or(None, palette::WHITE), palette::WHITE);
    }

    #[test]
    fn font_carries_weight() {
        assert_eq!(font(FontWeight::Bold).weight, Weight::Bold);
        assert_eq!(font(FontWeight::Normal), Font::default());
    }
}
