// SPDX-License-Identifier: MPL-2.0
use slider_picker::config::{self, PickerConfig};
use slider_picker::ui::cursor::{self, GestureDelta};
use slider_picker::ui::picker::{Event, Message, Picker};
use slider_picker::ui::viewport::Viewport;
use std::fs;
use tempfile::tempdir;

/// 1000px wide viewport: 850px track, 85px per step, handle resting on 5 at 425px.
fn viewport() -> Viewport {
    Viewport::new(1000.0, 500.0)
}

fn instant_picker(config: PickerConfig) -> Picker {
    Picker::new(config.snap_animation_ms(0), viewport())
}

fn cursor(message: cursor::Message) -> Message {
    Message::Cursor(message)
}

#[test]
fn picker_is_built_from_a_toml_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("picker.toml");
    fs::write(
        &path,
        r##"
[scale]
max_value = 4
default_value = 3

[labels]
min = "Cold"
max = "Hot"

[gesture]
snap_animation_ms = 0

[overrides.handle]
background = "#ff0000"
"##,
    )
    .expect("Failed to write config file");

    let config = config::load_from_path(&path).expect("Failed to load config");
    let picker = Picker::new(config, viewport());

    assert_eq!(picker.style().max_value.get(), 4);
    assert_eq!(picker.current_value(), 3);
    assert_eq!(picker.style().labels.min.as_deref(), Some("Cold"));
    assert_eq!(picker.style().labels.mid, None);
    assert_eq!(picker.style().handle.background, iced::Color::from_rgb8(255, 0, 0));
}

#[test]
fn saved_config_survives_a_round_trip_through_disk() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("nested").join("picker.toml");

    let config = PickerConfig::default()
        .max_value(7)
        .default_value(2.0)
        .labels("Low", "Mid", "High")
        .tick_scales(true, false);
    config::save_to_path(&config, &path).expect("Failed to save config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, config);
}

#[test]
fn full_drag_snaps_to_nearest_step() {
    let mut picker = instant_picker(PickerConfig::default());

    assert_eq!(picker.update(cursor(cursor::Message::Grant)), Event::SlideBegan);
    picker.update(cursor(cursor::Message::Move(GestureDelta::new(-100.0, 0.0))));
    picker.update(cursor(cursor::Message::Move(GestureDelta::new(-160.0, 0.0))));
    assert_eq!(
        picker.update(cursor(cursor::Message::Release(GestureDelta::new(-160.0, 0.0)))),
        Event::ValueChanged(3)
    );
    assert_eq!(picker.current_value(), 3);
    assert!(!picker.is_animating());
}

#[test]
fn vertical_drift_freezes_the_handle() {
    let mut picker = instant_picker(PickerConfig::default());

    picker.update(cursor(cursor::Message::Grant));
    picker.update(cursor(cursor::Message::Move(GestureDelta::new(-85.0, 0.0))));
    // Leaves the tolerance band: the dx of this frame is latched.
    picker.update(cursor(cursor::Message::Move(GestureDelta::new(-170.0, 80.0))));
    picker.update(cursor(cursor::Message::Move(GestureDelta::new(300.0, 90.0))));

    assert_eq!(
        picker.update(cursor(cursor::Message::Release(GestureDelta::new(300.0, 90.0)))),
        Event::ValueChanged(3)
    );
}

#[test]
fn release_past_the_ends_rests_on_the_end() {
    let mut picker = instant_picker(PickerConfig::default());

    picker.update(cursor(cursor::Message::Grant));
    assert_eq!(
        picker.update(cursor(cursor::Message::Release(GestureDelta::new(600.0, 0.0)))),
        Event::ValueChanged(10)
    );

    picker.update(cursor(cursor::Message::Grant));
    assert_eq!(
        picker.update(cursor(cursor::Message::Release(GestureDelta::new(-2000.0, 0.0)))),
        Event::ValueChanged(0)
    );
    assert_eq!(picker.current_value(), 0);
}

#[test]
fn tapping_the_track_then_dragging_continues_from_the_tap() {
    let mut picker = instant_picker(PickerConfig::default());

    assert_eq!(picker.update(Message::TrackPressed(90.0)), Event::ValueChanged(1));

    picker.update(cursor(cursor::Message::Grant));
    assert_eq!(
        picker.update(cursor(cursor::Message::Release(GestureDelta::new(170.0, 0.0)))),
        Event::ValueChanged(3)
    );
}

#[test]
fn release_without_grant_is_ignored() {
    let mut picker = instant_picker(PickerConfig::default());
    assert_eq!(
        picker.update(cursor(cursor::Message::Release(GestureDelta::new(-200.0, 0.0)))),
        Event::None
    );
    assert_eq!(picker.current_value(), 5);
}

#[test]
fn screen_reader_mode_reports_typed_values() {
    let mut picker = instant_picker(PickerConfig::default().max_value(20));
    picker.update(Message::ScreenReaderChanged(true));
    assert!(picker.shows_numeric_input());

    assert_eq!(
        picker.update(Message::NumericInputChanged("12".to_owned())),
        Event::ValueChanged(12)
    );
    assert_eq!(
        picker.update(Message::NumericInputChanged("-3".to_owned())),
        Event::ValueChanged(0)
    );
    assert_eq!(picker.numeric_input_value(), "0");
}

#[test]
fn reconfiguring_to_a_smaller_scale_caps_the_value() {
    let mut picker = instant_picker(PickerConfig::default());
    picker.update(Message::TrackPressed(850.0));
    assert_eq!(picker.current_value(), 10);

    picker.reconfigure(PickerConfig::default().max_value(4));
    assert_eq!(picker.current_value(), 4);
    assert_eq!(picker.cursor().map().max_value(), 4);
}

#[test]
fn oversized_or_malformed_scale_is_corrected_not_fatal() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("picker.toml");

    fs::write(&path, "[scale]\nmax_value = 4000000000\ndefault_value = 7\n")
        .expect("Failed to write config file");
    let config = config::load_from_path(&path).expect("Failed to load config");
    let picker = Picker::new(config, viewport());
    assert_eq!(
        picker.style().max_value.get(),
        slider_picker::config::MAX_MAX_VALUE
    );
    assert_eq!(
        picker.cursor().map().entries().len(),
        slider_picker::config::MAX_MAX_VALUE as usize + 1
    );
    assert_eq!(picker.current_value(), 7);

    fs::write(&path, "[scale]\nmax_value = \"ten\"\ndefault_value = 7\n")
        .expect("Failed to write config file");
    let config = config::load_from_path(&path).expect("Failed to load config");
    let picker = Picker::new(config, viewport());
    assert_eq!(picker.style().max_value.get(), 10);
    assert_eq!(picker.current_value(), 7);
}
