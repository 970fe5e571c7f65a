// SPDX-License-Identifier: MPL-2.0
//! Color strings as accepted in configuration.
//!
//! Supports a set of CSS keywords, `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`,
//! `rgb(r, g, b)` and `rgba(r, g, b, a)`.

use std::fmt;

/// An sRGB color with 8-bit channels and a fractional alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in `[0.0, 1.0]`.
    pub a: f32,
}

/// CSS keywords used by the picker defaults, plus the common basics.
const NAMED: &[(&str, Rgba)] = &[
    (
        "transparent",
        Rgba {
            r: 0,
            g: 0,
            b: 0,
            a: 0.0,
        },
    ),
    ("white", Rgba::opaque(255, 255, 255)),
    ("black", Rgba::opaque(0, 0, 0)),
    ("dimgrey", Rgba::opaque(105, 105, 105)),
    ("dimgray", Rgba::opaque(105, 105, 105)),
    ("dodgerblue", Rgba::opaque(30, 144, 255)),
    ("gainsboro", Rgba::opaque(220, 220, 220)),
    ("grey", Rgba::opaque(128, 128, 128)),
    ("gray", Rgba::opaque(128, 128, 128)),
    ("darkgrey", Rgba::opaque(169, 169, 169)),
    ("darkgray", Rgba::opaque(169, 169, 169)),
    ("lightgrey", Rgba::opaque(211, 211, 211)),
    ("lightgray", Rgba::opaque(211, 211, 211)),
    ("silver", Rgba::opaque(192, 192, 192)),
    ("whitesmoke", Rgba::opaque(245, 245, 245)),
    ("slategrey", Rgba::opaque(112, 128, 144)),
    ("slategray", Rgba::opaque(112, 128, 144)),
    ("red", Rgba::opaque(255, 0, 0)),
    ("tomato", Rgba::opaque(255, 99, 71)),
    ("orange", Rgba::opaque(255, 165, 0)),
    ("yellow", Rgba::opaque(255, 255, 0)),
    ("green", Rgba::opaque(0, 128, 0)),
    ("teal", Rgba::opaque(0, 128, 128)),
    ("blue", Rgba::opaque(0, 0, 255)),
    ("navy", Rgba::opaque(0, 0, 128)),
    ("purple", Rgba::opaque(128, 0, 128)),
];

impl Rgba {
    /// Creates a color from channels and alpha (alpha is clamped).
    #[must_use]
    pub fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r,
            g,
            b,
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Creates a fully opaque color.
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parses a color string, returning `None` when it is not recognized.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_ascii_lowercase();

        if let Some(hex) = input.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Some(args) = input
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_functional(args, true);
        }
        if let Some(args) = input
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_functional(args, false);
        }

        NAMED
            .iter()
            .find(|(name, _)| *name == input)
            .map(|(_, color)| *color)
    }

    /// Channels as floats in `[0.0, 1.0]`.
    #[must_use]
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            self.a,
        ]
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(Rgba::opaque(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Rgba::new(
            nibble(0)?,
            nibble(1)?,
            nibble(2)?,
            f32::from(nibble(3)?) / 255.0,
        )),
        6 => Some(Rgba::opaque(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Rgba::new(
            byte(0)?,
            byte(2)?,
            byte(4)?,
            f32::from(byte(6)?) / 255.0,
        )),
        _ => None,
    }
}

fn parse_functional(args: &str, with_alpha: bool) -> Option<Rgba> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }

    let channel = |s: &str| s.parse::<u8>().ok();
    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = if with_alpha {
        let alpha = parts[3].parse::<f32>().ok()?;
        if !alpha.is_finite() {
            return None;
        }
        alpha
    } else {
        1.0
    };

    Some(Rgba::new(r, g, b, a))
}

impl fmt::Display for Rgba {
    /// Formats as `#rrggbbaa`, which [`Rgba::parse`] reads back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        // alpha is clamped to [0, 1] so the product fits in u8
        let alpha = (self.a * 255.0).round() as u8;
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, alpha
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_colors_case_insensitively() {
        assert_eq!(Rgba::parse("DodgerBlue"), Some(Rgba::opaque(30, 144, 255)));
        assert_eq!(Rgba::parse(" dimgrey "), Some(Rgba::opaque(105, 105, 105)));
        assert_eq!(Rgba::parse("transparent").map(|c| c.a), Some(0.0));
    }

    #[test]
    fn parses_hex_forms() {
        assert_eq!(Rgba::parse("#fff"), Some(Rgba::opaque(255, 255, 255)));
        assert_eq!(Rgba::parse("#d9dce4"), Some(Rgba::opaque(0xd9, 0xdc, 0xe4)));
        let translucent = Rgba::parse("#00000080").expect("8-digit hex parses");
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(Rgba::parse("#f00f"), Some(Rgba::opaque(255, 0, 0)));
    }

    #[test]
    fn parses_functional_forms() {
        assert_eq!(Rgba::parse("rgb(1, 2, 3)"), Some(Rgba::opaque(1, 2, 3)));
        assert_eq!(
            Rgba::parse("rgba(10,20,30,0.5)"),
            Some(Rgba::new(10, 20, 30, 0.5))
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(Rgba::parse("#12"), None);
        assert_eq!(Rgba::parse("#zzzzzz"), None);
        assert_eq!(Rgba::parse("rgb(300, 0, 0)"), None);
        assert_eq!(Rgba::parse("rgba(1, 2, 3)"), None);
        assert_eq!(Rgba::parse("not-a-color"), None);
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Rgba::new(0, 0, 0, 4.0).a, 1.0);
        assert_eq!(Rgba::new(0, 0, 0, -1.0).a, 0.0);
    }

    #[test]
    fn display_is_parseable_hex() {
        let color = Rgba::opaque(30, 144, 255);
        assert_eq!(color.to_string(), "#1e90ffff");
        assert_eq!(Rgba::parse(&color.to_string()), Some(color));
    }
}
