// SPDX-License-Identifier: MPL-2.0
//! Font weight names as accepted in configuration.

/// Font weight of labels and scale numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    Thin,
    Light,
    #[default]
    Normal,
    Medium,
    Semibold,
    Bold,
    Black,
}

impl FontWeight {
    /// Parses a CSS-style weight: a keyword or a multiple of 100.
    ///
    /// Numeric weights map to the nearest named weight.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_ascii_lowercase();
        match input.as_str() {
            "thin" => Some(Self::Thin),
            "light" => Some(Self::Light),
            "normal" | "regular" => Some(Self::Normal),
            "medium" => Some(Self::Medium),
            "semibold" => Some(Self::Semibold),
            "bold" => Some(Self::Bold),
            "black" => Some(Self::Black),
            numeric => numeric.parse::<u16>().ok().and_then(Self::from_numeric),
        }
    }

    fn from_numeric(weight: u16) -> Option<Self> {
        match weight {
            100..=199 => Some(Self::Thin),
            200..=399 => Some(Self::Light),
            400..=499 => Some(Self::Normal),
            500..=599 => Some(Self::Medium),
            600..=699 => Some(Self::Semibold),
            700..=799 => Some(Self::Bold),
            800..=900 => Some(Self::Black),
            _ => None,
        }
    }

    /// Returns the canonical keyword.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Thin => "thin",
            Self::Light => "light",
            Self::Normal => "normal",
            Self::Medium => "medium",
            Self::Semibold => "semibold",
            Self::Bold => "bold",
            Self::Black => "black",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keywords() {
        assert_eq!(FontWeight::parse("Bold"), Some(FontWeight::Bold));
        assert_eq!(FontWeight::parse("normal"), Some(FontWeight::Normal));
        assert_eq!(FontWeight::parse("regular"), Some(FontWeight::Normal));
    }

    #[test]
    fn parses_numeric_weights() {
        assert_eq!(FontWeight::parse("400"), Some(FontWeight::Normal));
        assert_eq!(FontWeight::parse("700"), Some(FontWeight::Bold));
        assert_eq!(FontWeight::parse("250"), Some(FontWeight::Light));
        assert_eq!(FontWeight::parse("950"), None);
    }

    #[test]
    fn keyword_round_trips() {
        for weight in [FontWeight::Thin, FontWeight::Semibold, FontWeight::Black] {
            assert_eq!(FontWeight::parse(weight.as_str()), Some(weight));
        }
    }
}
