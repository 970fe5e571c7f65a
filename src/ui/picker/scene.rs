// SPDX-License-Identifier: MPL-2.0
//! Render plan of the picker.
//!
//! [`Scene::build`] turns the derived style and the cursor position into
//! plain geometry. The canvas draws the shapes, the view lays out the text,
//! and tests can inspect both without a renderer.

use super::style::{PickerStyle, TextStyle};
use crate::ui::cursor::CursorView;
use iced::{Color, Point, Rectangle, Size};

/// A filled, optionally bordered rounded rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub bounds: Rectangle,
    pub color: Color,
    pub border_color: Color,
    pub border_width: f32,
    pub radius: f32,
}

/// A vertical tick line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separator {
    pub index: u32,
    pub x: f32,
    pub top: f32,
    pub bottom: f32,
    pub width: f32,
    pub color: Color,
}

/// The round cursor handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub center: Point,
    pub radius: f32,
    pub color: Color,
    pub border_color: Color,
    pub border_width: f32,
}

impl Handle {
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.center.distance(point) <= self.radius
    }
}

/// Horizontal placement of a label above the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub align: LabelAlign,
}

/// One number of the scale under the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberCell {
    pub value: u32,
    pub width: f32,
}

/// Everything drawn for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Size of the drawing area holding track, separators and handle.
    pub size: Size,
    /// X of the track start inside the drawing area.
    pub track_origin: f32,
    pub track: Block,
    pub fill: Option<Block>,
    /// Drawn below the track, left to right.
    pub separators: Vec<Separator>,
    pub handle: Handle,
    pub labels: Vec<Label>,
    pub label_text: TextStyle,
    pub numbers: Vec<NumberCell>,
}

impl Scene {
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // scale values are small
    pub fn build(style: &PickerStyle, cursor: &CursorView, current_value: u32) -> Self {
        let track_style = &style.track;
        let diameter = cursor.width.max(0.0);
        let track_origin = diameter * 0.5;

        let separator_height = style.separators.map_or(0.0, |s| s.height);
        let height = diameter
            .max(track_style.height)
            .max(separator_height)
            + style.handle.border_width * 2.0;
        let size = Size::new(track_style.width + diameter, height);
        let center_y = height * 0.5;

        let track = Block {
            bounds: Rectangle {
                x: track_origin,
                y: center_y - track_style.height * 0.5,
                width: track_style.width,
                height: track_style.height,
            },
            color: track_style.background,
            border_color: track_style.border_color,
            border_width: track_style.border_width,
            radius: track_style.radius,
        };

        let fill = style.fill.map(|fill| Block {
            bounds: Rectangle {
                x: track_origin + track_style.border_width,
                y: center_y - fill.height * 0.5,
                width: style.fill_width(current_value),
                height: fill.height,
            },
            color: fill.color,
            border_color: Color::TRANSPARENT,
            border_width: 0.0,
            radius: fill.radius,
        });

        let max = style.max_value.get();
        let separators = style
            .separators
            .map(|sep| {
                (0..=max)
                    .map(|index| Separator {
                        index,
                        x: track_origin + track_style.width * index as f32 / max as f32,
                        top: center_y - sep.height * 0.5,
                        bottom: center_y + sep.height * 0.5,
                        width: sep.line_width,
                        color: if style.separator_visible(index, current_value) {
                            sep.color
                        } else {
                            Color::TRANSPARENT
                        },
                    })
                    .collect()
            })
            .unwrap_or_default();

        let handle = Handle {
            center: Point::new(track_origin + cursor.left + diameter * 0.5, center_y),
            radius: diameter * 0.5,
            color: style.handle.background,
            border_color: style.handle.border_color,
            border_width: style.handle.border_width,
        };

        let labels = [
            (&style.labels.min, LabelAlign::Left),
            (&style.labels.mid, LabelAlign::Center),
            (&style.labels.max, LabelAlign::Right),
        ]
        .into_iter()
        .filter_map(|(text, align)| {
            text.as_ref().map(|text| Label {
                text: text.clone(),
                align,
            })
        })
        .collect();

        let numbers = style
            .numbers
            .map(|numbers| {
                (0..=max)
                    .map(|value| NumberCell {
                        value,
                        width: numbers.cell_width(value),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            size,
            track_origin,
            track,
            fill,
            separators,
            handle,
            labels,
            label_text: style.labels.text,
            numbers,
        }
    }

    /// Converts an x coordinate of the drawing area to a track position.
    #[must_use]
    pub fn to_track_x(&self, x: f32) -> f32 {
        x - self.track_origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PickerConfig;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use crate::ui::viewport::Viewport;

    fn style(config: &PickerConfig) -> PickerStyle {
        PickerStyle::new(config, Viewport::new(1000.0, 500.0))
    }

    fn cursor_at(style: &PickerStyle, value: u32) -> CursorView {
        let diameter = style.handle.diameter;
        CursorView {
            left: style.track.width * value as f32 / style.max_value.as_f32() - diameter / 2.0,
            width: diameter,
        }
    }

    #[test]
    fn track_is_inset_by_half_a_handle() {
        let style = style(&PickerConfig::default());
        let scene = Scene::build(&style, &cursor_at(&style, 5), 5);

        assert_abs_diff_eq!(scene.track_origin, 30.0);
        assert_abs_diff_eq!(scene.size.width, 910.0);
        assert_abs_diff_eq!(scene.track.bounds.x, 30.0);
        assert_abs_diff_eq!(scene.to_track_x(130.0), 100.0);
    }

    #[test]
    fn handle_is_centered_on_value() {
        let style = style(&PickerConfig::default());
        let scene = Scene::build(&style, &cursor_at(&style, 5), 5);

        assert_abs_diff_eq!(scene.handle.center.x, 30.0 + 425.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(scene.handle.radius, 30.0);
        assert!(scene.handle.contains(scene.handle.center));
    }

    #[test]
    fn fill_tracks_current_value() {
        let style = style(&PickerConfig::default());
        let scene = Scene::build(&style, &cursor_at(&style, 2), 2);
        let fill = scene.fill.expect("fill shown");
        assert_abs_diff_eq!(fill.bounds.width, 167.5, epsilon = F32_EPSILON);
    }

    #[test]
    fn separators_cover_every_step() {
        let config = PickerConfig::default().tick_scales(false, true);
        let style = style(&config);
        let scene = Scene::build(&style, &cursor_at(&style, 3), 3);

        assert_eq!(scene.separators.len(), 11);
        let transparent: Vec<u32> = scene
            .separators
            .iter()
            .filter(|s| s.color == Color::TRANSPARENT)
            .map(|s| s.index)
            .collect();
        assert_eq!(transparent, vec![0, 3, 10]);
        assert_abs_diff_eq!(scene.separators[10].x, 880.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn labels_keep_their_slots() {
        let config = PickerConfig::default().labels("Low", "", "High");
        let style = style(&config);
        let scene = Scene::build(&style, &cursor_at(&style, 0), 0);

        let aligns: Vec<LabelAlign> = scene.labels.iter().map(|l| l.align).collect();
        assert_eq!(aligns, vec![LabelAlign::Left, LabelAlign::Right]);
    }

    #[test]
    fn numbers_absent_unless_enabled() {
        let style = style(&PickerConfig::default());
        assert!(Scene::build(&style, &cursor_at(&style, 0), 0).numbers.is_empty());

        let style = self::style(&PickerConfig::default().tick_scales(true, false));
        let scene = Scene::build(&style, &cursor_at(&style, 0), 0);
        assert_eq!(scene.numbers.len(), 11);
        assert_eq!(scene.numbers[4].value, 4);
    }
}
