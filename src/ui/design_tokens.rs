// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Default look of the slider picker. Every token here can be overridden from
the picker configuration; these are the values used when it says nothing.

## Organization

- **Palette**: Base colors of the track, handle, text and numeric input
- **Viewport**: Fractions of the viewport used for spacing
- **Radius**: Border radii
- **Typography**: Font size of the demo readout

## Examples

```
use slider_picker::ui::design_tokens::{palette, radius};

let track = palette::TRACK_BORDER;
let pill = radius::TRACK;
assert!(pill > 0.0);
# let _ = track;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const TRANSPARENT: Color = Color::TRANSPARENT;

    /// CSS `dimgrey`: handle border, labels and numbers.
    pub const DIM_GREY: Color = Color::from_rgb8(105, 105, 105);
    /// CSS `dodgerblue`: track fill.
    pub const DODGER_BLUE: Color = Color::from_rgb8(30, 144, 255);
    /// CSS `gainsboro`: tick separators.
    pub const GAINSBORO: Color = Color::from_rgb8(220, 220, 220);

    pub const TRACK_BORDER: Color = Color::from_rgb8(0xd9, 0xdc, 0xe4);
    pub const INPUT_BACKGROUND: Color = Color::from_rgb8(0xf1, 0xf4, 0xf5);
    pub const INPUT_UNDERLINE: Color = Color::from_rgb8(0x88, 0x9c, 0xb2);
}

// ============================================================================
// Viewport Fractions
// ============================================================================

pub mod viewport {
    //! Percentages passed to [`crate::ui::viewport::Viewport::vw`] and
    //! [`crate::ui::viewport::Viewport::vh`].

    /// Label row padding when at least one label is shown (of width).
    pub const LABELS_PADDING_VW: f32 = 6.0;
    /// Label row padding when no label is shown (of height).
    pub const LABELS_EMPTY_PADDING_VH: f32 = 5.0;
    /// Space under the track when numbers are hidden (of height).
    pub const WRAPPER_MARGIN_VH: f32 = 2.0;
    /// Numeric input container width (of width).
    pub const INPUT_WIDTH_VW: f32 = 25.0;
    /// Numeric input inner padding (of width).
    pub const INPUT_PADDING_VW: f32 = 4.0;
    /// Base of the numeric input font size (of width).
    pub const INPUT_FONT_VW: f32 = 3.0;
    pub const INPUT_FONT_SCALE: f32 = 1.3;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const INPUT: f32 = 10.0;
    /// Large enough to round any track into a pill.
    pub const TRACK: f32 = 50.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    /// Value readout of the demo application.
    pub const READOUT: f32 = 18.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(viewport::INPUT_WIDTH_VW > 0.0 && viewport::INPUT_WIDTH_VW <= 100.0);
    assert!(viewport::LABELS_PADDING_VW > 0.0);
    assert!(viewport::INPUT_FONT_SCALE >= 1.0);
    assert!(radius::TRACK > radius::INPUT);
    assert!(radius::INPUT > radius::NONE);
    assert!(typography::READOUT > typography::CAPTION);
};
