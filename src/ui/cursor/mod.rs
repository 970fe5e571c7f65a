// SPDX-License-Identifier: MPL-2.0
//! Draggable cursor handle of the slider picker.
//!
//! The cursor owns the value-to-offset table, the drag state machine and the
//! snapping animation. It reports snapped values to its owner as [`Event`]s
//! and never reads the owner's state directly: presses elsewhere on the track
//! reach it through a [`PressSignal`].

pub mod animation;
pub mod drag;
pub mod offset_map;

pub use animation::SnapAnimation;
pub use drag::{DragState, GestureDelta, Outcome, Phase};
pub use offset_map::OffsetMap;

use crate::domain::{MaxValue, SnapDuration, ToleranceMargin};
use std::time::Instant;

/// Messages driving the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// The pointer went down on the handle.
    Grant,
    Move(GestureDelta),
    Release(GestureDelta),
    /// The gesture was taken away (pointer left the widget).
    Terminate(GestureDelta),
}

/// Events propagated to the owner of the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    SlideBegan,
    ValueChanged(u32),
}

impl From<Outcome> for Event {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::None => Event::None,
            Outcome::SlideBegan => Event::SlideBegan,
            Outcome::Released(value) => Event::ValueChanged(value),
        }
    }
}

/// Press on the track outside the handle, as recorded by the owner.
///
/// The cursor reacts only when both the location and the trigger flag differ
/// from the previous signal it saw.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PressSignal {
    pub location: Option<f32>,
    pub trigger: bool,
}

/// Inputs the cursor is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorConfig {
    /// Track width in pixels.
    pub max_offset: f32,
    pub max_value: MaxValue,
    /// Value the handle starts on.
    pub value: u32,
    pub handle_width: f32,
    pub tolerance: ToleranceMargin,
    pub snap: SnapDuration,
}

/// Geometry of the handle for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorView {
    /// Left edge relative to the track start.
    pub left: f32,
    pub width: f32,
}

/// The cursor component.
#[derive(Debug, Clone)]
pub struct Cursor {
    map: OffsetMap,
    drag: DragState,
    handle_width: f32,
    tolerance: ToleranceMargin,
    snap: SnapDuration,
    animation: Option<SnapAnimation>,
    animated_left: Option<f32>,
    last_press: PressSignal,
}

impl Cursor {
    #[must_use]
    pub fn new(config: CursorConfig) -> Self {
        let map = OffsetMap::new(config.max_offset, config.max_value);
        let drag = DragState::resting(&map, config.value, config.handle_width);
        Self {
            map,
            drag,
            handle_width: config.handle_width,
            tolerance: config.tolerance,
            snap: config.snap,
            animation: None,
            animated_left: None,
            last_press: PressSignal::default(),
        }
    }

    /// Handles a gesture message received at `now`.
    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::Grant => {
                self.stop_animation();
                self.drag.grant().into()
            }
            Message::Move(gesture) => {
                self.drag.drag(gesture, &self.map, self.tolerance);
                Event::None
            }
            Message::Release(gesture) | Message::Terminate(gesture) => {
                let from = self.drag.displayed();
                let outcome = self.drag.release(gesture, &self.map);
                self.animate_from(from, now);
                outcome.into()
            }
        }
    }

    /// Compares `signal` with the previous one and moves the handle when
    /// the owner recorded a new press.
    pub fn sync_press(&mut self, signal: PressSignal, now: Instant) -> Event {
        let previous = std::mem::replace(&mut self.last_press, signal);
        if previous.trigger == signal.trigger || previous.location == signal.location {
            return Event::None;
        }
        match signal.location {
            Some(x) => self.press_at(x, now),
            None => Event::None,
        }
    }

    /// Moves the handle to the step nearest track position `x`.
    pub fn press_at(&mut self, x: f32, now: Instant) -> Event {
        let from = self.left();
        let outcome = self.drag.jump_to(x, &self.map, self.handle_width);
        self.stop_animation();
        self.animate_from(from, now);
        outcome.into()
    }

    /// Advances the snap animation.
    pub fn tick(&mut self, now: Instant) {
        if let Some(animation) = self.animation {
            if animation.is_finished(now) {
                self.stop_animation();
            } else {
                self.animated_left = Some(animation.position_at(now));
            }
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Left edge of the handle as currently drawn.
    #[must_use]
    pub fn left(&self) -> f32 {
        self.animated_left.unwrap_or_else(|| self.drag.displayed())
    }

    #[must_use]
    pub fn view(&self) -> CursorView {
        CursorView {
            left: self.left(),
            width: self.handle_width,
        }
    }

    #[must_use]
    pub fn map(&self) -> &OffsetMap {
        &self.map
    }

    #[must_use]
    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    fn animate_from(&mut self, from: f32, now: Instant) {
        self.animation = SnapAnimation::start(from, self.drag.displayed(), self.snap, now);
        self.animated_left = self.animation.map(|_| from);
    }

    fn stop_animation(&mut self) {
        self.animation = None;
        self.animated_left = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use std::time::Duration;

    fn cursor(snap_ms: u32) -> Cursor {
        Cursor::new(CursorConfig {
            max_offset: 100.0,
            max_value: MaxValue::new(10),
            value: 5,
            handle_width: 10.0,
            tolerance: ToleranceMargin::default(),
            snap: SnapDuration::from_millis(snap_ms),
        })
    }

    #[test]
    fn drag_cycle_reports_events() {
        let mut cursor = cursor(0);
        let now = Instant::now();

        assert_eq!(cursor.update(Message::Grant, now), Event::SlideBegan);
        let gesture = GestureDelta::new(-22.0, 0.0);
        assert_eq!(cursor.update(Message::Move(gesture), now), Event::None);
        assert_eq!(
            cursor.update(Message::Release(gesture), now),
            Event::ValueChanged(3)
        );
        assert_abs_diff_eq!(cursor.left(), 25.0, epsilon = 1e-4);
    }

    #[test]
    fn terminate_behaves_like_release() {
        let mut cursor = cursor(0);
        let now = Instant::now();
        cursor.update(Message::Grant, now);
        assert_eq!(
            cursor.update(Message::Terminate(GestureDelta::new(31.0, 0.0)), now),
            Event::ValueChanged(8)
        );
    }

    #[test]
    fn press_signal_fires_only_when_both_fields_change() {
        let mut cursor = cursor(0);
        let now = Instant::now();

        let pressed = PressSignal {
            location: Some(71.0),
            trigger: true,
        };
        assert_eq!(cursor.sync_press(pressed, now), Event::ValueChanged(7));

        // Owner records the value and resets the trigger.
        let reset = PressSignal {
            location: Some(71.0),
            trigger: false,
        };
        assert_eq!(cursor.sync_press(reset, now), Event::None);

        // Same location again: only the trigger flips.
        assert_eq!(cursor.sync_press(pressed, now), Event::None);

        assert_eq!(cursor.sync_press(reset, now), Event::None);
        let elsewhere_pressed = PressSignal {
            location: Some(33.0),
            trigger: true,
        };
        assert_eq!(cursor.sync_press(elsewhere_pressed, now), Event::ValueChanged(3));
    }

    #[test]
    fn release_animates_towards_rest() {
        let mut cursor = cursor(100);
        let start = Instant::now();
        cursor.update(Message::Grant, start);
        let gesture = GestureDelta::new(17.0, 0.0);
        cursor.update(Message::Move(gesture), start);
        cursor.update(Message::Release(gesture), start);

        // Drawn where the pointer let go, logically already on 7.
        assert!(cursor.is_animating());
        assert_abs_diff_eq!(cursor.left(), 62.0, epsilon = 1e-4);
        assert_abs_diff_eq!(cursor.drag_state().latest_position(), 70.0, epsilon = 1e-4);

        cursor.tick(start + Duration::from_millis(50));
        let midway = cursor.left();
        assert!(midway > 62.0 && midway < 65.0);

        cursor.tick(start + Duration::from_millis(150));
        assert!(!cursor.is_animating());
        assert_abs_diff_eq!(cursor.left(), 65.0, epsilon = 1e-4);
    }

    #[test]
    fn grant_cancels_animation() {
        let mut cursor = cursor(100);
        let now = Instant::now();
        cursor.press_at(90.0, now);
        assert!(cursor.is_animating());

        cursor.update(Message::Grant, now);
        assert!(!cursor.is_animating());
        assert_abs_diff_eq!(cursor.left(), 85.0, epsilon = 1e-4);
    }
}
