// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core picker rules with ZERO external dependencies.
//!
//! This module contains pure value objects and the rules that correct raw
//! configuration input into valid values. It has no dependencies on external
//! crates (except `std`) so the rules stay trivially testable.
//!
//! # Modules
//!
//! - [`scale`]: Scale and gesture value objects ([`MaxValue`](scale::MaxValue),
//!   [`ViewportPercent`](scale::ViewportPercent),
//!   [`ToleranceMargin`](scale::ToleranceMargin),
//!   [`SnapDuration`](scale::SnapDuration))
//! - [`color`]: Color strings as accepted in configuration ([`Rgba`](color::Rgba))
//! - [`font`]: Font weight names ([`FontWeight`](font::FontWeight))

pub mod color;
pub mod font;
pub mod scale;

pub use color::Rgba;
pub use font::FontWeight;
pub use scale::{MaxValue, SnapDuration, ToleranceMargin, ViewportPercent};
