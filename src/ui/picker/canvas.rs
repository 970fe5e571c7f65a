// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing the track and handle and tracking pointer gestures.
//!
//! Mouse and touch input are reduced to the same gesture: a press on the
//! handle starts a drag reported as cumulative deltas, a press and release
//! anywhere else on the drawing area is a track press.

use super::scene::{Block, Scene};
use super::Message;
use crate::ui::cursor::{self, GestureDelta};
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::Action;
use iced::{mouse, touch, Point, Rectangle, Renderer, Theme};

/// Pointer bookkeeping kept by the canvas between events.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureTracker {
    /// Where a handle drag started, in window coordinates.
    origin: Option<Point>,
    last_delta: GestureDelta,
    /// Track x of a press outside the handle, reported on release.
    pending_press: Option<f32>,
}

impl GestureTracker {
    fn delta_to(&self, origin: Point, position: Point) -> GestureDelta {
        GestureDelta::new(position.x - origin.x, position.y - origin.y)
    }
}

/// Pointer input common to mouse and touch.
enum Pointer {
    Down(Point),
    Moved(Point),
    Up(Point),
    Lost,
}

fn pointer(event: &iced::Event, cursor: mouse::Cursor) -> Option<Pointer> {
    match event {
        iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            cursor.position().map(Pointer::Down)
        }
        iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Pointer::Moved(*position))
        }
        iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            cursor.position().map(Pointer::Up)
        }
        iced::Event::Mouse(mouse::Event::CursorLeft) => Some(Pointer::Lost),
        iced::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Pointer::Down(*position))
        }
        iced::Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(Pointer::Moved(*position))
        }
        iced::Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(Pointer::Up(*position))
        }
        iced::Event::Touch(touch::Event::FingerLost { .. }) => Some(Pointer::Lost),
        _ => None,
    }
}

/// Canvas program for one frame of the picker.
#[derive(Debug, Clone)]
pub struct PickerCanvas {
    scene: Scene,
}

impl PickerCanvas {
    #[must_use]
    pub fn new(scene: Scene) -> Self {
        Self { scene }
    }

    fn local(bounds: Rectangle, position: Point) -> Point {
        Point::new(position.x - bounds.x, position.y - bounds.y)
    }
}

impl canvas::Program<Message> for PickerCanvas {
    type State = GestureTracker;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match pointer(event, cursor)? {
            Pointer::Down(position) => {
                if !bounds.contains(position) {
                    return None;
                }
                let local = Self::local(bounds, position);
                if self.scene.handle.contains(local) {
                    state.origin = Some(position);
                    state.last_delta = GestureDelta::default();
                    state.pending_press = None;
                    Some(Action::publish(Message::Cursor(cursor::Message::Grant)).and_capture())
                } else {
                    state.pending_press = Some(self.scene.to_track_x(local.x));
                    Some(Action::capture())
                }
            }
            Pointer::Moved(position) => {
                let origin = state.origin?;
                let delta = state.delta_to(origin, position);
                state.last_delta = delta;
                Some(Action::publish(Message::Cursor(cursor::Message::Move(delta))).and_capture())
            }
            Pointer::Up(position) => {
                if let Some(origin) = state.origin.take() {
                    let delta = state.delta_to(origin, position);
                    return Some(
                        Action::publish(Message::Cursor(cursor::Message::Release(delta)))
                            .and_capture(),
                    );
                }
                let x = state.pending_press.take()?;
                bounds
                    .contains(position)
                    .then(|| Action::publish(Message::TrackPressed(x)).and_capture())
            }
            Pointer::Lost => {
                state.pending_press = None;
                state.origin.take().map(|_| {
                    Action::publish(Message::Cursor(cursor::Message::Terminate(
                        state.last_delta,
                    )))
                    .and_capture()
                })
            }
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let scene = &self.scene;

        for separator in &scene.separators {
            let line = Path::line(
                Point::new(separator.x, separator.top),
                Point::new(separator.x, separator.bottom),
            );
            frame.stroke(
                &line,
                Stroke::default()
                    .with_width(separator.width)
                    .with_color(separator.color),
            );
        }

        draw_block(&mut frame, &scene.track);
        if let Some(fill) = &scene.fill {
            draw_block(&mut frame, fill);
        }

        let handle = &scene.handle;
        let circle = Path::circle(handle.center, handle.radius);
        frame.fill(&circle, handle.color);
        if handle.border_width > 0.0 {
            frame.stroke(
                &circle,
                Stroke::default()
                    .with_width(handle.border_width)
                    .with_color(handle.border_color),
            );
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.origin.is_some() {
            return mouse::Interaction::Grabbing;
        }
        match cursor.position_in(bounds) {
            Some(local) if self.scene.handle.contains(local) => mouse::Interaction::Grab,
            Some(_) => mouse::Interaction::Pointer,
            None => mouse::Interaction::default(),
        }
    }
}

fn draw_block(frame: &mut Frame, block: &Block) {
    let bounds = block.bounds;
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return;
    }
    let radius = block.radius.min(bounds.width.min(bounds.height) * 0.5);
    let path = Path::rounded_rectangle(bounds.position(), bounds.size(), radius.into());
    frame.fill(&path, block.color);
    if block.border_width > 0.0 {
        frame.stroke(
            &path,
            Stroke::default()
                .with_width(block.border_width)
                .with_color(block.border_color),
        );
    }
}
