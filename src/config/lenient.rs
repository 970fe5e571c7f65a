// SPDX-License-Identifier: MPL-2.0
//! Field-level deserializers that never fail.
//!
//! A malformed value (an unknown color, a number given as prose) is logged
//! and replaced by `None`, so the rest of the file still loads and the field
//! falls back to its default.

use crate::domain::{FontWeight, Rgba};
use serde::{Deserialize, Deserializer, Serializer};
use toml::Value;

fn warn_ignored(kind: &str, value: &Value) {
    log::warn!("ignoring malformed {kind} in picker config: {value}");
}

#[allow(clippy::cast_precision_loss)] // config numbers are small
fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Integer(i) => Some(*i as f64),
        Value::Float(f) => Some(*f),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Reads a number given as integer, float or numeric string.
pub fn number_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = as_f64(&value);
    if parsed.is_none() {
        warn_ignored("number", &value);
    }
    Ok(parsed)
}

/// Same as [`number_f64`], narrowed to `f32`.
#[allow(clippy::cast_possible_truncation)] // pixel and percent values
pub fn number_f32<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    number_f64(deserializer).map(|n| n.map(|v| v as f32))
}

/// Reads a non-negative whole number; larger than `u32` saturates.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // checked non-negative
pub fn count_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = as_f64(&value)
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map(|n| n.round() as u32);
    if parsed.is_none() {
        warn_ignored("count", &value);
    }
    Ok(parsed)
}

/// Reads a color string, see [`Rgba::parse`].
pub fn color<'de, D>(deserializer: D) -> Result<Option<Rgba>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = value.as_str().and_then(Rgba::parse);
    if parsed.is_none() {
        warn_ignored("color", &value);
    }
    Ok(parsed)
}

/// Reads a font weight given as keyword or number.
pub fn font_weight<'de, D>(deserializer: D) -> Result<Option<FontWeight>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::String(s) => FontWeight::parse(s),
        Value::Integer(i) => FontWeight::parse(&i.to_string()),
        _ => None,
    };
    if parsed.is_none() {
        warn_ignored("font weight", &value);
    }
    Ok(parsed)
}

pub fn serialize_color<S>(value: &Option<Rgba>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(color) => serializer.serialize_str(&color.to_string()),
        None => serializer.serialize_none(),
    }
}

pub fn serialize_font_weight<S>(
    value: &Option<FontWeight>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(weight) => serializer.serialize_str(weight.as_str()),
        None => serializer.serialize_none(),
    }
}
