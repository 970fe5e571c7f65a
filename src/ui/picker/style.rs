// SPDX-License-Identifier: MPL-2.0
//! Derived picker style.
//!
//! [`PickerStyle`] resolves a [`PickerConfig`] against a [`Viewport`] once:
//! defaults are filled in, invalid values corrected and per-part overrides
//! applied. It is rebuilt only when the configuration or viewport changes.

use crate::config::defaults::{
    DEFAULT_HANDLE_BORDER_WIDTH, DEFAULT_HANDLE_PERCENT, DEFAULT_HEIGHT_PERCENT,
    DEFAULT_LABEL_FONT_SIZE, DEFAULT_NUMBER_FONT_SIZE, DEFAULT_WIDTH_PERCENT, TRACK_RADIUS,
    TICK_SCALE_MIN_WIDTH_PERCENT,
};
use crate::config::{FontConfig, PartStyle, PickerConfig};
use crate::domain::{MaxValue, SnapDuration, ToleranceMargin, ViewportPercent};
use crate::ui::design_tokens::{palette, radius, viewport as vp};
use crate::ui::theme;
use crate::ui::viewport::Viewport;
use iced::{Color, Font};

/// Resolved text appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub size: f32,
    pub font: Font,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackStyle {
    pub width: f32,
    pub height: f32,
    pub background: Color,
    pub border_width: f32,
    pub border_color: Color,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillStyle {
    pub color: Color,
    pub height: f32,
    pub radius: f32,
    /// Subtracted from the proportional fill width.
    pub inset: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleStyle {
    pub diameter: f32,
    pub background: Color,
    pub border_color: Color,
    pub border_width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparatorStyle {
    pub color: Color,
    pub line_width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberScaleStyle {
    pub text: TextStyle,
    /// Width of every number cell but the first.
    pub step_width: f32,
    /// Extra width of the first cell.
    pub first_extra: f32,
    /// Space above the numbers when no separators are drawn.
    pub margin_top: f32,
    pub margin_bottom: f32,
}

impl NumberScaleStyle {
    /// Width of the cell holding number `index`.
    #[must_use]
    pub fn cell_width(&self, index: u32) -> f32 {
        if index == 0 {
            self.step_width + self.first_extra
        } else {
            self.step_width
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelsStyle {
    pub min: Option<String>,
    pub mid: Option<String>,
    pub max: Option<String>,
    pub text: TextStyle,
    pub width: f32,
    pub padding_bottom: f32,
}

impl LabelsStyle {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.mid.is_none() && self.max.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumericInputStyle {
    pub width: f32,
    pub background: Color,
    pub underline_color: Color,
    pub underline_width: f32,
    pub padding: f32,
    pub radius: f32,
    pub text: TextStyle,
    pub label: String,
    pub hint: String,
}

/// Everything the picker needs to render, derived from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerStyle {
    pub max_value: MaxValue,
    pub default_value: u32,
    pub tolerance: ToleranceMargin,
    pub snap: SnapDuration,
    pub track: TrackStyle,
    /// `None` when the fill is hidden.
    pub fill: Option<FillStyle>,
    pub handle: HandleStyle,
    /// `None` when separators are hidden or suppressed.
    pub separators: Option<SeparatorStyle>,
    /// `None` when numbers are hidden or suppressed.
    pub numbers: Option<NumberScaleStyle>,
    pub labels: LabelsStyle,
    /// Space under the track when the number scale is hidden.
    pub wrapper_margin_bottom: f32,
    pub convert_to_numeric_input: bool,
    pub numeric_input: NumericInputStyle,
}

impl PickerStyle {
    /// Resolves `config` against `viewport`.
    #[must_use]
    pub fn new(config: &PickerConfig, viewport: Viewport) -> Self {
        let overrides = &config.overrides;

        let max_value = resolve_max_value(config.scale.max_value);
        let default_value = max_value.resolve_default(config.scale.default_value);
        if let Some(raw) = config.scale.default_value {
            if !raw.is_finite() || raw < 0.0 || raw > f64::from(max_value.get()) {
                log::warn!(
                    "default value {raw} is outside 0..={}, using {default_value}",
                    max_value.get()
                );
            }
        }

        let width_percent =
            ViewportPercent::new(config.track.width_percentage, DEFAULT_WIDTH_PERCENT);
        let height_percent =
            ViewportPercent::new(config.track.height_percentage, DEFAULT_HEIGHT_PERCENT);

        let track = track_style(config, viewport, width_percent, height_percent);
        let fill = (config.track.show_fill != Some(false))
            .then(|| fill_style(config, viewport, &track));
        let handle = handle_style(config, viewport);

        let tick_scales_allowed = max_value.allows_tick_scale()
            && width_percent.value() > TICK_SCALE_MIN_WIDTH_PERCENT;
        let show_separators =
            tick_scales_allowed && config.scale.show_separator_scale.unwrap_or(false);
        let show_numbers = tick_scales_allowed && config.scale.show_number_scale.unwrap_or(false);

        let separators = show_separators.then(|| {
            let part = part(overrides.separator.as_ref());
            SeparatorStyle {
                color: theme::color_or(part.color, palette::GAINSBORO),
                line_width: part.width.unwrap_or_else(|| viewport.vw(1.0) / 3.0),
                height: part
                    .height
                    .unwrap_or_else(|| viewport.vh(height_percent.value()) * 3.0),
            }
        });

        let numbers = show_numbers.then(|| {
            let text = text_style(
                &config.numbers.font,
                overrides.number.as_ref(),
                DEFAULT_NUMBER_FONT_SIZE,
            );
            NumberScaleStyle {
                step_width: (track.width / max_value.as_f32()).floor(),
                first_extra: viewport.vw(1.0) / 3.0 * 2.0,
                margin_top: if show_separators { 0.0 } else { text.size * 0.75 },
                margin_bottom: viewport.vh(vp::WRAPPER_MARGIN_VH),
                text,
            }
        });

        let labels = labels_style(config, viewport, width_percent);

        let wrapper_margin_bottom = if show_numbers {
            0.0
        } else {
            viewport.vh(vp::WRAPPER_MARGIN_VH)
        };

        Self {
            max_value,
            default_value,
            tolerance: ToleranceMargin::from_config(config.gesture.error_tolerance_margin),
            snap: config
                .gesture
                .snap_animation_ms
                .map_or_else(SnapDuration::default, SnapDuration::from_millis),
            track,
            fill,
            handle,
            separators,
            numbers,
            labels,
            wrapper_margin_bottom,
            convert_to_numeric_input: config
                .accessibility
                .convert_to_numeric_input
                .unwrap_or(true),
            numeric_input: numeric_input_style(config, viewport),
        }
    }

    /// Fill width for `current`, never negative.
    #[must_use]
    pub fn fill_width(&self, current: u32) -> f32 {
        let inset = self.fill.map_or(0.0, |fill| fill.inset);
        let ratio = f64::from(current.min(self.max_value.get())) / f64::from(self.max_value.get());
        #[allow(clippy::cast_possible_truncation)] // ratio is in [0, 1]
        let proportional = self.track.width * ratio as f32;
        (proportional - inset).max(0.0)
    }

    /// Separators at both ends and under the current value are drawn
    /// transparent.
    #[must_use]
    pub fn separator_visible(&self, index: u32, current: u32) -> bool {
        index != 0 && index != self.max_value.get() && index != current
    }
}

fn resolve_max_value(raw: Option<u32>) -> MaxValue {
    if raw == Some(0) {
        log::warn!("max value must be positive, using the default");
    }
    raw.map_or_else(MaxValue::default, MaxValue::new)
}

/// Empty override when none is configured.
fn part(style: Option<&PartStyle>) -> PartStyle {
    style.cloned().unwrap_or_default()
}

fn track_style(
    config: &PickerConfig,
    viewport: Viewport,
    width_percent: ViewportPercent,
    height_percent: ViewportPercent,
) -> TrackStyle {
    let part = part(config.overrides.track.as_ref());
    let border = config.track.border.clone().unwrap_or_default();

    TrackStyle {
        width: viewport.vw(width_percent.value()),
        height: part
            .height
            .unwrap_or_else(|| viewport.vh(height_percent.value())),
        background: theme::color_or(
            part.background.or(config.track.background_color),
            palette::WHITE,
        ),
        border_width: part
            .border_width
            .or(border.width)
            .unwrap_or_else(|| viewport.vw(1.0) / 2.0)
            .max(0.0),
        border_color: theme::color_or(
            part.border_color.or(border.color),
            palette::TRACK_BORDER,
        ),
        radius: part.radius.or(border.radius).unwrap_or(TRACK_RADIUS),
    }
}

fn fill_style(config: &PickerConfig, viewport: Viewport, track: &TrackStyle) -> FillStyle {
    let part = part(config.overrides.fill.as_ref());
    FillStyle {
        color: theme::color_or(
            part.background.or(config.track.fill_color),
            palette::DODGER_BLUE,
        ),
        height: (track.height - track.border_width * 2.0).max(0.0),
        radius: part.radius.unwrap_or(TRACK_RADIUS),
        inset: viewport.vh(1.0) * 0.5,
    }
}

fn handle_style(config: &PickerConfig, viewport: Viewport) -> HandleStyle {
    let part = part(config.overrides.handle.as_ref());
    let percent = ViewportPercent::new(config.handle.dimensions_percentage, DEFAULT_HANDLE_PERCENT);

    HandleStyle {
        diameter: part
            .width
            .filter(|w| w.is_finite() && *w > 0.0)
            .unwrap_or_else(|| viewport.vw(percent.value())),
        background: theme::color_or(
            part.background.or(config.handle.background_color),
            palette::WHITE,
        ),
        border_color: theme::color_or(
            part.border_color.or(config.handle.border_color),
            palette::DIM_GREY,
        ),
        border_width: part
            .border_width
            .or(config.handle.border_width)
            .unwrap_or(DEFAULT_HANDLE_BORDER_WIDTH)
            .max(0.0),
    }
}

fn text_style(font: &FontConfig, over: Option<&PartStyle>, default_size: f32) -> TextStyle {
    let part = part(over);
    TextStyle {
        color: theme::color_or(part.color.or(font.font_color), palette::DIM_GREY),
        size: part
            .font_size
            .or(font.font_size)
            .filter(|size| size.is_finite() && *size > 0.0)
            .unwrap_or(default_size),
        font: theme::font(font.font_weight.unwrap_or_default()),
    }
}

fn labels_style(
    config: &PickerConfig,
    viewport: Viewport,
    width_percent: ViewportPercent,
) -> LabelsStyle {
    let non_empty = |label: &Option<String>| label.clone().filter(|text| !text.is_empty());
    let min = non_empty(&config.labels.min);
    let mid = non_empty(&config.labels.mid);
    let max = non_empty(&config.labels.max);
    let empty = min.is_none() && mid.is_none() && max.is_none();

    LabelsStyle {
        min,
        mid,
        max,
        text: text_style(
            &config.labels.font,
            config.overrides.label.as_ref(),
            DEFAULT_LABEL_FONT_SIZE,
        ),
        width: viewport.vw(width_percent.value() + 1.0),
        padding_bottom: if empty {
            viewport.vh(vp::LABELS_EMPTY_PADDING_VH)
        } else {
            viewport.vw(vp::LABELS_PADDING_VW)
        },
    }
}

fn numeric_input_style(config: &PickerConfig, viewport: Viewport) -> NumericInputStyle {
    let container = part(config.overrides.numeric_input_container.as_ref());
    let text = part(config.overrides.numeric_input_text.as_ref());

    NumericInputStyle {
        width: container
            .width
            .unwrap_or_else(|| viewport.vw(vp::INPUT_WIDTH_VW)),
        background: theme::color_or(container.background, palette::INPUT_BACKGROUND),
        underline_color: theme::color_or(container.border_color, palette::INPUT_UNDERLINE),
        underline_width: container
            .border_width
            .unwrap_or_else(|| viewport.vh(1.0) / 3.0),
        padding: viewport.vw(vp::INPUT_PADDING_VW),
        radius: container.radius.unwrap_or(radius::INPUT),
        text: TextStyle {
            color: theme::color_or(text.color, palette::DIM_GREY),
            size: text.font_size.unwrap_or_else(|| {
                (viewport.vw(vp::INPUT_FONT_VW) * vp::INPUT_FONT_SCALE).ceil()
            }),
            font: Font::default(),
        },
        label: config.accessibility.label.clone().unwrap_or_default(),
        hint: config.accessibility.hint.clone().unwrap_or_default(),
    }
}
