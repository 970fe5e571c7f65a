// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::picker;
use iced::Size;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Picker(picker::Message),
    WindowResized(Size),
    /// Animation frame while the handle is easing into place.
    Tick(Instant),
    ScreenReaderDetected(bool),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Explicit path to a `picker.toml`.
    pub config_path: Option<PathBuf>,
    /// Treat a screen reader as active.
    pub screen_reader: bool,
    /// Overrides `scale.max_value` from the configuration.
    pub max_value: Option<u32>,
}
