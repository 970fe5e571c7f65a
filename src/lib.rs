// SPDX-License-Identifier: MPL-2.0
//! `slider_picker` is a discrete slider picker built with the Iced GUI framework.
//!
//! The picker maps a horizontal track onto the integers `0..=max_value`. A
//! draggable handle snaps to the nearest value on release, the track accepts
//! taps, and optional labels and tick scales sit around it. When a screen
//! reader is active the widget turns into a numeric text input.
//!
//! # Example
//!
//! ```no_run
//! use slider_picker::config::PickerConfig;
//! use slider_picker::ui::picker::Picker;
//! use slider_picker::ui::viewport::Viewport;
//!
//! let config = PickerConfig::default().max_value(4).default_value(2.0);
//! let picker = Picker::new(config, Viewport::default());
//! assert_eq!(picker.current_value(), 2);
//! ```

#![doc(html_root_url = "https://docs.rs/slider_picker/0.1.0")]

pub mod accessibility;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
