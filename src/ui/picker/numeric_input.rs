// SPDX-License-Identifier: MPL-2.0
//! Text entry that replaces the slider when a screen reader is active.

use crate::domain::MaxValue;

/// Result of interpreting the text typed into the numeric field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericEdit {
    /// What the field shows afterwards.
    pub text: String,
    /// Value to report, if the text is a number.
    pub value: Option<u32>,
}

/// Interprets typed text against the scale.
///
/// Numbers above the scale are replaced by its maximum, below it by 0, and
/// the field text is rewritten to match. Fractions round to the nearest
/// step. Text that is not a number stays in the field and reports nothing.
#[must_use]
pub fn interpret(input: &str, max: MaxValue) -> NumericEdit {
    let parsed = input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite());

    let Some(number) = parsed else {
        return NumericEdit {
            text: input.to_owned(),
            value: None,
        };
    };

    if number > f64::from(max.get()) {
        log::debug!("numeric input {number} above scale, clamping to {}", max.get());
        return NumericEdit {
            text: max.get().to_string(),
            value: Some(max.get()),
        };
    }
    if number < 0.0 {
        return NumericEdit {
            text: "0".to_owned(),
            value: Some(0),
        };
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // number is within [0, max]
    let value = (number.round() as u32).min(max.get());
    NumericEdit {
        text: input.to_owned(),
        value: Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn max() -> MaxValue {
        MaxValue::new(10)
    }

    #[test]
    fn in_range_numbers_pass_through() {
        assert_eq!(
            interpret("7", max()),
            NumericEdit {
                text: "7".into(),
                value: Some(7)
            }
        );
    }

    #[test]
    fn above_range_is_replaced_by_max() {
        assert_eq!(
            interpret("42", max()),
            NumericEdit {
                text: "10".into(),
                value: Some(10)
            }
        );
    }

    #[test]
    fn below_range_is_replaced_by_zero() {
        assert_eq!(
            interpret("-3", max()),
            NumericEdit {
                text: "0".into(),
                value: Some(0)
            }
        );
    }

    #[test]
    fn fractions_round() {
        assert_eq!(interpret("2.6", max()).value, Some(3));
        assert_eq!(interpret("2.6", max()).text, "2.6");
    }

    #[test]
    fn non_numbers_are_kept_but_not_reported() {
        for text in ["", "  ", "abc", "NaN", "inf"] {
            let edit = interpret(text, max());
            assert_eq!(edit.text, text);
            assert_eq!(edit.value, None);
        }
    }
}
