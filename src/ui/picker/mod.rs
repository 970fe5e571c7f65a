// SPDX-License-Identifier: MPL-2.0
//! Slider picker component.
//!
//! The picker owns the configuration and the selected value. It renders the
//! track, labels and tick scales, forwards drag gestures to the
//! [`Cursor`](crate::ui::cursor::Cursor) and turns presses elsewhere on the
//! track into a [`PressSignal`].
//!
//! # Example
//!
//! ```
//! use slider_picker::config::PickerConfig;
//! use slider_picker::ui::picker::{Event, Message, Picker};
//! use slider_picker::ui::viewport::Viewport;
//!
//! let mut picker = Picker::new(PickerConfig::default().max_value(4), Viewport::default());
//! let track_width = picker.style().track.width;
//!
//! let event = picker.update(Message::TrackPressed(track_width));
//! assert_eq!(event, Event::ValueChanged(4));
//! assert_eq!(picker.current_value(), 4);
//! ```

pub mod canvas;
pub mod numeric_input;
pub mod scene;
pub mod style;
mod view;

pub use scene::Scene;
pub use style::PickerStyle;

use crate::config::PickerConfig;
use crate::ui::cursor::{self, Cursor, CursorConfig, PressSignal};
use crate::ui::viewport::Viewport;
use iced::{Element, Size};
use std::time::Instant;

/// Messages handled by the picker.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Gesture on the handle.
    Cursor(cursor::Message),
    /// Press on the track outside the handle, at this track x.
    TrackPressed(f32),
    NumericInputChanged(String),
    ScreenReaderChanged(bool),
    ViewportResized(Size),
    /// Animation frame.
    Tick(Instant),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The selected value changed (or was re-selected).
    ValueChanged(u32),
    /// A drag on the handle started.
    SlideBegan,
}

/// Picker state.
#[derive(Debug, Clone)]
pub struct Picker {
    config: PickerConfig,
    viewport: Viewport,
    style: PickerStyle,
    cursor: Cursor,
    current_value: u32,
    press: PressSignal,
    screen_reader_enabled: bool,
    numeric_input_value: String,
}

impl Picker {
    #[must_use]
    pub fn new(config: PickerConfig, viewport: Viewport) -> Self {
        let style = PickerStyle::new(&config, viewport);
        let current_value = style.default_value;
        let cursor = build_cursor(&style, current_value);
        Self {
            config,
            viewport,
            style,
            cursor,
            current_value,
            press: PressSignal::default(),
            screen_reader_enabled: false,
            numeric_input_value: String::new(),
        }
    }

    /// Handles a message, timestamping it now.
    pub fn update(&mut self, message: Message) -> Event {
        self.update_at(message, Instant::now())
    }

    /// Handles a message received at `now`.
    pub fn update_at(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::Cursor(message) => match self.cursor.update(message, now) {
                cursor::Event::None => Event::None,
                cursor::Event::SlideBegan => Event::SlideBegan,
                cursor::Event::ValueChanged(value) => self.record(value, now),
            },
            Message::TrackPressed(x) => {
                self.press = PressSignal {
                    location: Some(x),
                    trigger: true,
                };
                match self.cursor.sync_press(self.press, now) {
                    cursor::Event::ValueChanged(value) => self.record(value, now),
                    _ => Event::None,
                }
            }
            Message::NumericInputChanged(text) => {
                let edit = numeric_input::interpret(&text, self.style.max_value);
                self.numeric_input_value = edit.text;
                match edit.value {
                    Some(value) => {
                        self.current_value = value;
                        self.cursor = build_cursor(&self.style, value);
                        self.press = PressSignal::default();
                        Event::ValueChanged(value)
                    }
                    None => Event::None,
                }
            }
            Message::ScreenReaderChanged(enabled) => {
                log::info!("screen reader enabled: {enabled}");
                self.screen_reader_enabled = enabled;
                Event::None
            }
            Message::ViewportResized(size) => {
                let viewport = Viewport::from(size);
                if viewport != self.viewport {
                    self.viewport = viewport;
                    self.rebuild();
                }
                Event::None
            }
            Message::Tick(now) => {
                self.cursor.tick(now);
                Event::None
            }
        }
    }

    /// Replaces the configuration, keeping the current value when it still
    /// fits the scale.
    pub fn reconfigure(&mut self, config: PickerConfig) {
        self.config = config;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.style = PickerStyle::new(&self.config, self.viewport);
        self.current_value = self.current_value.min(self.style.max_value.get());
        self.cursor = build_cursor(&self.style, self.current_value);
        self.press = PressSignal::default();
    }

    /// Stores a value reported by the cursor and resets the press trigger.
    fn record(&mut self, value: u32, now: Instant) -> Event {
        self.current_value = value;
        self.press.trigger = false;
        self.cursor.sync_press(self.press, now);
        Event::ValueChanged(value)
    }

    #[must_use]
    pub fn current_value(&self) -> u32 {
        self.current_value
    }

    #[must_use]
    pub fn style(&self) -> &PickerStyle {
        &self.style
    }

    #[must_use]
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    #[must_use]
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    #[must_use]
    pub fn press_signal(&self) -> PressSignal {
        self.press
    }

    #[must_use]
    pub fn numeric_input_value(&self) -> &str {
        &self.numeric_input_value
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.cursor.is_animating()
    }

    /// Whether the numeric text field is shown instead of the slider.
    #[must_use]
    pub fn shows_numeric_input(&self) -> bool {
        self.screen_reader_enabled && self.style.convert_to_numeric_input
    }

    /// Geometry of the current frame.
    #[must_use]
    pub fn scene(&self) -> Scene {
        Scene::build(&self.style, &self.cursor.view(), self.current_value)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

fn build_cursor(style: &PickerStyle, value: u32) -> Cursor {
    Cursor::new(CursorConfig {
        max_offset: style.track.width,
        max_value: style.max_value,
        value,
        handle_width: style.handle.diameter,
        tolerance: style.tolerance,
        snap: style.snap,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::cursor::GestureDelta;

    fn picker() -> Picker {
        // 1000px wide viewport: 850px track, 85px per step.
        Picker::new(
            PickerConfig::default().snap_animation_ms(0),
            Viewport::new(1000.0, 500.0),
        )
    }

    #[test]
    fn starts_on_default_value() {
        assert_eq!(picker().current_value(), 5);
    }

    #[test]
    fn default_above_scale_starts_on_max() {
        let picker = Picker::new(
            PickerConfig::default().max_value(10).default_value(11.0),
            Viewport::new(1000.0, 500.0),
        );
        assert_eq!(picker.current_value(), 10);
    }

    #[test]
    fn drag_reports_slide_and_value() {
        let mut picker = picker();
        let gesture = GestureDelta::new(-170.0, 0.0);

        assert_eq!(
            picker.update(Message::Cursor(cursor::Message::Grant)),
            Event::SlideBegan
        );
        picker.update(Message::Cursor(cursor::Message::Move(gesture)));
        assert_eq!(
            picker.update(Message::Cursor(cursor::Message::Release(gesture))),
            Event::ValueChanged(3)
        );
        assert_eq!(picker.current_value(), 3);
    }

    #[test]
    fn track_press_moves_value_and_resets_trigger() {
        let mut picker = picker();

        assert_eq!(picker.update(Message::TrackPressed(600.0)), Event::ValueChanged(7));
        assert_eq!(picker.current_value(), 7);
        assert_eq!(
            picker.press_signal(),
            PressSignal {
                location: Some(600.0),
                trigger: false
            }
        );

        assert_eq!(picker.update(Message::TrackPressed(100.0)), Event::ValueChanged(1));
    }

    #[test]
    fn repeated_press_at_same_spot_is_ignored() {
        let mut picker = picker();
        picker.update(Message::TrackPressed(600.0));
        assert_eq!(picker.update(Message::TrackPressed(600.0)), Event::None);
    }

    #[test]
    fn numeric_input_clamps_and_reports() {
        let mut picker = picker();
        assert_eq!(
            picker.update(Message::NumericInputChanged("99".into())),
            Event::ValueChanged(10)
        );
        assert_eq!(picker.numeric_input_value(), "10");
        assert_eq!(picker.current_value(), 10);

        assert_eq!(
            picker.update(Message::NumericInputChanged("x".into())),
            Event::None
        );
        assert_eq!(picker.numeric_input_value(), "x");
        assert_eq!(picker.current_value(), 10);
    }

    #[test]
    fn numeric_input_needs_screen_reader() {
        let mut picker = picker();
        assert!(!picker.shows_numeric_input());
        picker.update(Message::ScreenReaderChanged(true));
        assert!(picker.shows_numeric_input());

        let mut config = PickerConfig::default();
        config.accessibility.convert_to_numeric_input = Some(false);
        picker.reconfigure(config);
        assert!(!picker.shows_numeric_input());
    }

    #[test]
    fn resize_rebuilds_offsets_and_keeps_value() {
        let mut picker = picker();
        picker.update(Message::TrackPressed(600.0));
        picker.update(Message::ViewportResized(Size::new(2000.0, 1000.0)));

        assert_eq!(picker.current_value(), 7);
        assert!((picker.cursor().map().max_offset() - 1700.0).abs() < 1e-3);
        assert!((picker.cursor().drag_state().latest_position() - 1190.0).abs() < 1e-2);
    }

    #[test]
    fn reconfigure_caps_value_to_new_scale() {
        let mut picker = picker();
        picker.update(Message::TrackPressed(840.0));
        picker.reconfigure(PickerConfig::default().max_value(4));
        assert_eq!(picker.current_value(), 4);
    }
}
