// SPDX-License-Identifier: MPL-2.0
//! This module handles the picker configuration, including loading and saving
//! it to a `picker.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[scale]` - Range, starting value and tick visibility
//! - `[track]` - Track dimensions, colors, fill and border
//! - `[handle]` - Cursor dimensions and colors
//! - `[labels]` - Min/mid/max label text and font
//! - `[numbers]` - Scale number font
//! - `[gesture]` - Vertical tolerance margin and snap animation
//! - `[accessibility]` - Screen reader label, hint and numeric input switch
//! - `[overrides.<part>]` - Per-part style overrides
//!
//! Every field is optional. Missing or malformed values fall back to the
//! defaults in [`defaults`]; nothing in a config file can make the widget fail.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `SLIDER_PICKER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use slider_picker::config::{self, PickerConfig};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! // Adjust the scale
//! let config = config.max_value(5).default_value(2.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
mod lenient;

pub use defaults::*;

use crate::domain::{FontWeight, Rgba};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "picker.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "SliderPicker";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "SLIDER_PICKER_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Scale range and tick visibility.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ScaleConfig {
    /// Upper end of the scale (lower end is always 0).
    #[serde(
        default,
        deserialize_with = "lenient::count_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_value: Option<u32>,

    /// Starting value. Accepts numbers or numeric strings.
    #[serde(
        default,
        deserialize_with = "lenient::number_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_value: Option<f64>,

    /// Draw a number under every step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_number_scale: Option<bool>,

    /// Draw a separator line at every step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_separator_scale: Option<bool>,
}

/// Border of the track. Only border properties can be expressed here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BorderConfig {
    #[serde(
        default,
        deserialize_with = "lenient::number_f32",
        skip_serializing_if = "Option::is_none"
    )]
    pub width: Option<f32>,

    #[serde(
        default,
        deserialize_with = "lenient::color",
        serialize_with = "lenient::serialize_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<Rgba>,

    #[serde(
        default,
        deserialize_with = "lenient::number_f32",
        skip_serializing_if = "Option::is_none"
    )]
    pub radius: Option<f32>,
}

/// Track dimensions, colors and fill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TrackConfig {
    /// Track width as a percentage of the viewport width.
    #[serde(
        default,
        deserialize_with = "lenient::number_f32",
        skip_serializing_if = "Option::is_none"
    )]
    pub width_percentage: Option<f32>,

    /// Track height as a percentage of the viewport height.
    #[serde(
        default,
        deserialize_with = "lenient::number_f32",
        skip_serializing_if = "Option::is_none"
    )]
    pub height_percentage: Option<f32>,

    #[serde(
        default,
        deserialize_with = "lenient::color",
        serialize_with = "lenient::serialize_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub background_color: Option<Rgba>,

    #[serde(
        default,
        deserialize_with = "lenient::color",
        serialize_with = "lenient::serialize_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub fill_color: Option<Rgba>,

    /// Whether the part of the track left of the cursor is filled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_fill: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderConfig>,
}

/// Cursor handle appearance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct HandleConfig {
    /// Handle diameter as a percentage of the viewport width.
    #[serde(
        default,
        deserialize_with = "lenient::number_f32",
        skip_serializing_if = "Option::is_none"
    )]
    pub dimensions_percentage: Option<f32>,

    #[serde(
        default,
        deserialize_with = "lenient::color",
        serialize_with = "lenient::serialize_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub background_color: Option<Rgba>,

    #[serde(
        default,
        deserialize_with = "lenient::color",
        serialize_with = "lenient::serialize_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub border_color: Option<Rgba>,

    #[serde(
        default,
        deserialize_with = "lenient::number_f32",
        skip_serializing_if = "Option::is_none"
    )]
    pub border_width: Option<f32>,
}

/// Font settings shared by labels and scale numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FontConfig {
    #[serde(
        default,
        deserialize_with = "lenient::color",
        serialize_with = "lenient::serialize_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_color: Option<Rgba>,

    #[serde(
        default,
        deserialize_with = "lenient::number_f32",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_size: Option<f32>,

    #[serde(
        default,
        deserialize_with = "lenient::font_weight",
        serialize_with = "lenient::serialize_font_weight",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_weight: Option<FontWeight>,
}

/// Text shown above the track at the min, mid and max positions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LabelsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,

    #[serde(flatten)]
    pub font: FontConfig,
}

/// Scale numbers drawn under the track.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NumbersConfig {
    #[serde(flatten)]
    pub font: FontConfig,
}

/// Drag gesture tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GestureConfig {
    /// Vertical drift (px) tolerated before horizontal movement freezes.
    /// Zero or missing uses the default; negative disables the check.
    #[serde(
        default,
        deserialize_with = "lenient::number_f32",
        skip_serializing_if = "Option::is_none"
    )]
    pub error_tolerance_margin: Option<f32>,

    /// Release-time snapping animation, in milliseconds (0 disables).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snap_animation_ms: Option<u32>,
}

/// Screen reader support.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AccessibilityConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,

    /// Replace the slider by a numeric text field when a screen reader is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub convert_to_numeric_input: Option<bool>,
}

/// Style properties that can override the computed style of one part.
///
/// A property set here wins over the value derived from the other sections,
/// except for geometry the picker has to control (fill width, track width).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PartStyle {
    #[serde(
        default,
        deserialize_with = "lenient::color",
        serialize_with = "lenient::serialize_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub background: Option<Rgba>,

    /// Text color for text parts, line color for separators.
    #[serde(
        default,
        deserialize_with = "lenient::color",
        serialize_with = "lenient::serialize_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<Rgba>,

    #[serde(
        default,
        deserialize_with = "lenient::color",
        serialize_with = "lenient::serialize_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub border_color: Option<Rgba>,

    #[serde(
        default,
        deserialize_with = "lenient::number_f32",
        skip_serializing_if = "Option::is_none"
    )]
    pub border_width: Option<f32>,

    #[serde(
        default,
        deserialize_with = "lenient::number_f32",
        skip_serializing_if = "Option::is_none"
    )]
    pub radius: Option<f32>,

    #[serde(
        default,
        deserialize_with = "lenient::number_f32",
        skip_serializing_if = "Option::is_none"
    )]
    pub width: Option<f32>,

    #[serde(
        default,
        deserialize_with = "lenient::number_f32",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<f32>,

    #[serde(
        default,
        deserialize_with = "lenient::number_f32",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_size: Option<f32>,
}

/// Per-part style overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StyleOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<PartStyle>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<PartStyle>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<PartStyle>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<PartStyle>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<PartStyle>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<PartStyle>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_input_container: Option<PartStyle>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_input_text: Option<PartStyle>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Picker configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PickerConfig {
    #[serde(default)]
    pub scale: ScaleConfig,

    #[serde(default)]
    pub track: TrackConfig,

    #[serde(default)]
    pub handle: HandleConfig,

    #[serde(default)]
    pub labels: LabelsConfig,

    #[serde(default)]
    pub numbers: NumbersConfig,

    #[serde(default)]
    pub gesture: GestureConfig,

    #[serde(default)]
    pub accessibility: AccessibilityConfig,

    #[serde(default)]
    pub overrides: StyleOverrides,
}

impl PickerConfig {
    /// Sets the upper end of the scale.
    #[must_use]
    pub fn max_value(mut self, max_value: u32) -> Self {
        self.scale.max_value = Some(max_value);
        self
    }

    /// Sets the starting value.
    #[must_use]
    pub fn default_value(mut self, value: f64) -> Self {
        self.scale.default_value = Some(value);
        self
    }

    /// Sets the track width as a percentage of the viewport width.
    #[must_use]
    pub fn width_percentage(mut self, percent: f32) -> Self {
        self.track.width_percentage = Some(percent);
        self
    }

    /// Sets the vertical tolerance margin in pixels.
    #[must_use]
    pub fn tolerance_margin(mut self, margin: f32) -> Self {
        self.gesture.error_tolerance_margin = Some(margin);
        self
    }

    /// Sets the snapping animation duration.
    #[must_use]
    pub fn snap_animation_ms(mut self, millis: u32) -> Self {
        self.gesture.snap_animation_ms = Some(millis);
        self
    }

    /// Turns the number and separator tick scales on or off.
    #[must_use]
    pub fn tick_scales(mut self, numbers: bool, separators: bool) -> Self {
        self.scale.show_number_scale = Some(numbers);
        self.scale.show_separator_scale = Some(separators);
        self
    }

    /// Sets the min, mid and max label text.
    #[must_use]
    pub fn labels(
        mut self,
        min: impl Into<String>,
        mid: impl Into<String>,
        max: impl Into<String>,
    ) -> Self {
        self.labels.min = Some(min.into());
        self.labels.mid = Some(mid.into());
        self.labels.max = Some(max.into());
        self
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory with an optional override.
///
/// Priority: explicit override, then `SLIDER_PICKER_CONFIG_DIR`, then the
/// platform config directory.
fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = base_dir {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (PickerConfig, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (PickerConfig, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("falling back to default picker config: {err}");
                    return (
                        PickerConfig::default(),
                        Some(format!("Could not load {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (PickerConfig::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<PickerConfig> {
    let content = fs::read_to_string(path)?;
    let config: PickerConfig = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &PickerConfig) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &PickerConfig, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &PickerConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
