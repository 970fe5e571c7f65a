// SPDX-License-Identifier: MPL-2.0
//! Property tests for the value/offset mapping and release snapping.

use proptest::prelude::*;
use slider_picker::domain::{MaxValue, SnapDuration, ToleranceMargin};
use slider_picker::ui::cursor::{self, Cursor, CursorConfig, GestureDelta, OffsetMap};
use std::time::Instant;

fn cursor_for(max_offset: f32, max_value: u32, value: u32) -> Cursor {
    Cursor::new(CursorConfig {
        max_offset,
        max_value: MaxValue::new(max_value),
        value,
        handle_width: 40.0,
        tolerance: ToleranceMargin::disabled(),
        snap: SnapDuration::from_millis(0),
    })
}

proptest! {
    #[test]
    fn every_step_maps_back_to_itself(width in 10.0f32..4000.0, max in 1u32..100) {
        let map = OffsetMap::new(width, MaxValue::new(max));
        for value in 0..=max {
            prop_assert_eq!(map.nearest(map.offset_of(value)), value);
        }
    }

    #[test]
    fn nearest_is_monotonic(
        width in 10.0f32..4000.0,
        max in 1u32..100,
        a in -500.0f32..4500.0,
        b in -500.0f32..4500.0,
    ) {
        let map = OffsetMap::new(width, MaxValue::new(max));
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(map.nearest(low) <= map.nearest(high));
    }

    #[test]
    fn nearest_stays_on_the_scale(width in 0.0f32..4000.0, max in 1u32..100, x in -1e6f32..1e6) {
        let map = OffsetMap::new(width, MaxValue::new(max));
        prop_assert!(map.nearest(x) <= max);
    }

    #[test]
    fn releasing_a_drag_matches_tapping_there(
        max in 1u32..30,
        start in 0u32..30,
        dx in -1200.0f32..1200.0,
    ) {
        let width = 900.0;
        let start = start.min(max);
        let now = Instant::now();

        let mut dragged = cursor_for(width, max, start);
        let origin = dragged.map().offset_of(start);
        prop_assume!(dragged.map().contains(origin + dx));

        dragged.update(cursor::Message::Grant, now);
        dragged.update(cursor::Message::Move(GestureDelta::new(dx, 0.0)), now);
        let released = dragged.update(cursor::Message::Release(GestureDelta::new(dx, 0.0)), now);

        let mut tapped = cursor_for(width, max, start);
        let pressed = tapped.press_at(origin + dx, now);

        prop_assert_eq!(released, pressed);
        prop_assert!((dragged.left() - tapped.left()).abs() < 1e-2);
    }
}
