// SPDX-License-Identifier: MPL-2.0
//! Drag gesture state machine of the cursor handle.
//!
//! The handle position is kept as `base + delta`: `base` is committed at the
//! start of a gesture, `delta` follows the pointer. Releasing snaps the
//! handle to a scale step and folds `delta` back into `base`.

use super::offset_map::OffsetMap;
use crate::domain::ToleranceMargin;

/// Cumulative pointer displacement since the gesture started.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureDelta {
    pub dx: f32,
    pub dy: f32,
}

impl GestureDelta {
    #[must_use]
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

/// Whether a gesture is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Dragging,
}

/// What a transition reports to the owner of the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    None,
    SlideBegan,
    /// The handle came to rest on this scale value.
    Released(u32),
}

/// Position and gesture bookkeeping of the handle.
///
/// While idle, `base == latest_position - handle_width / 2` and `delta == 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    base: f32,
    delta: f32,
    latest_position: f32,
    latched_dx: Option<f32>,
    phase: Phase,
}

impl DragState {
    /// Idle state with the handle resting on `value`.
    #[must_use]
    pub fn resting(map: &OffsetMap, value: u32, handle_width: f32) -> Self {
        let latest_position = map.offset_of(value);
        Self {
            base: latest_position - handle_width * 0.5,
            delta: 0.0,
            latest_position,
            latched_dx: None,
            phase: Phase::Idle,
        }
    }

    /// Left edge of the handle relative to the track start.
    #[must_use]
    pub fn displayed(&self) -> f32 {
        self.base + self.delta
    }

    /// Track offset of the last committed position.
    #[must_use]
    pub fn latest_position(&self) -> f32 {
        self.latest_position
    }

    /// Horizontal delta latched when the vertical tolerance was exceeded.
    #[must_use]
    pub fn latched_dx(&self) -> Option<f32> {
        self.latched_dx
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn flatten(&mut self) {
        self.base += self.delta;
        self.delta = 0.0;
    }

    /// Starts a gesture from the currently displayed position.
    pub fn grant(&mut self) -> Outcome {
        self.flatten();
        self.phase = Phase::Dragging;
        log::debug!("slide began at {}", self.latest_position);
        Outcome::SlideBegan
    }

    /// Follows the pointer.
    ///
    /// Vertical drift beyond `tolerance` freezes the handle and latches the
    /// horizontal delta of the first frozen frame. Positions off the track
    /// leave the handle where it is.
    pub fn drag(&mut self, gesture: GestureDelta, map: &OffsetMap, tolerance: ToleranceMargin) {
        if self.phase == Phase::Idle {
            return;
        }

        if tolerance.is_exceeded(gesture.dy) {
            if self.latched_dx.is_none() {
                log::debug!("vertical tolerance exceeded, latching dx={}", gesture.dx);
                self.latched_dx = Some(gesture.dx);
            }
            return;
        }

        let final_value = gesture.dx + self.latest_position;
        if map.contains(final_value) {
            self.latched_dx = None;
            self.delta = gesture.dx;
        }
    }

    /// Ends the gesture and snaps to the nearest step.
    ///
    /// A release past either end of the track rests on the end in the
    /// direction of the live horizontal delta. Ignored while idle.
    pub fn release(&mut self, gesture: GestureDelta, map: &OffsetMap) -> Outcome {
        if self.phase == Phase::Idle {
            return Outcome::None;
        }

        let dx = self.latched_dx.take().unwrap_or(gesture.dx);
        let final_value = dx + self.latest_position;

        let resting = if map.contains(final_value) {
            map.offset_of(map.nearest(final_value))
        } else if gesture.dx > 0.0 {
            map.max_offset()
        } else {
            0.0
        };
        let value = map.nearest(final_value);

        self.delta = resting - self.latest_position;
        self.latest_position = resting;
        self.flatten();
        self.phase = Phase::Idle;

        log::debug!("released at {final_value}, snapped to {value}");
        Outcome::Released(value)
    }

    /// Moves the handle straight to the step nearest track position `x`.
    pub fn jump_to(&mut self, x: f32, map: &OffsetMap, handle_width: f32) -> Outcome {
        let value = map.nearest(x);
        let offset = map.offset_of(value);

        self.base = offset - handle_width * 0.5;
        self.delta = 0.0;
        self.latest_position = offset;
        self.latched_dx = None;
        self.phase = Phase::Idle;

        log::debug!("track pressed at {x}, snapped to {value}");
        Outcome::Released(value)
    }
}
