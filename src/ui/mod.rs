// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one has an `update` returning an `Event` for its parent and a `view`.
//!
//! # Components
//!
//! - [`picker`] - The slider picker: track, labels, tick scales, numeric input
//! - [`cursor`] - The draggable handle and its snapping logic
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Default colors and viewport fractions
//! - [`theme`] - Conversions from configuration values to iced types
//! - [`viewport`] - Viewport-relative units

pub mod cursor;
pub mod design_tokens;
pub mod picker;
pub mod theme;
pub mod viewport;
