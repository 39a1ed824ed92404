// SPDX-License-Identifier: MPL-2.0
//! Bridges iced events and the frame clock to the pan/zoom controller.
//!
//! Iced reports touches one finger at a time, while the controller reasons
//! about every contact on the surface, so [`TouchTracker`] keeps the live
//! contact list. [`EventTranslator`] turns raw window events into
//! [`GestureInput`] relative to the surface bounds.

use crate::config::FRAME_INTERVAL_MS;
use crate::pan_zoom::{FrameScheduler, GestureInput, PanZoomController, Surface};
use iced::event::Status;
use iced::{mouse, touch, Point, Rectangle, Subscription};
use std::time::{Duration, Instant};

/// Normalizes a wheel delta to "lines" (one notch of a classic wheel).
#[must_use]
pub fn scroll_steps(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => *y,
        mouse::ScrollDelta::Pixels { y, .. } => *y / 120.0,
    }
}

/// Frame clock for deceleration, active only while a frame is pending.
pub fn frame_subscription(pending: bool) -> Subscription<iced::time::Instant> {
    if pending {
        iced::time::every(Duration::from_millis(FRAME_INTERVAL_MS))
    } else {
        Subscription::none()
    }
}

/// Live touch contacts, in press order.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    fingers: Vec<(touch::Finger, Point)>,
}

impl TouchTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fingers currently down.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fingers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fingers.is_empty()
    }

    /// Updates the contact list and returns the matching gesture input.
    ///
    /// Positions are made relative to `origin`. Presses are only tracked when
    /// `accept_press` is true (the finger landed on the surface).
    pub fn handle(
        &mut self,
        event: &touch::Event,
        origin: Point,
        accept_press: bool,
    ) -> Option<GestureInput> {
        match *event {
            touch::Event::FingerPressed { id, position } => {
                if !accept_press {
                    return None;
                }
                let position = relative(position, origin);
                match self.fingers.iter_mut().find(|(finger, _)| *finger == id) {
                    Some(entry) => entry.1 = position,
                    None => self.fingers.push((id, position)),
                }
                Some(GestureInput::TouchStart {
                    touches: self.touches(),
                })
            }
            touch::Event::FingerMoved { id, position } => {
                let entry = self.fingers.iter_mut().find(|(finger, _)| *finger == id)?;
                entry.1 = relative(position, origin);
                Some(GestureInput::TouchMove {
                    touches: self.touches(),
                })
            }
            touch::Event::FingerLifted { id, .. } => {
                self.remove(id)?;
                Some(GestureInput::TouchEnd {
                    touches: self.touches(),
                })
            }
            touch::Event::FingerLost { id, .. } => {
                self.remove(id)?;
                if self.fingers.is_empty() {
                    Some(GestureInput::TouchCancel)
                } else {
                    Some(GestureInput::TouchEnd {
                        touches: self.touches(),
                    })
                }
            }
        }
    }

    fn touches(&self) -> Vec<Point> {
        self.fingers.iter().map(|(_, position)| *position).collect()
    }

    fn remove(&mut self, id: touch::Finger) -> Option<Point> {
        let index = self.fingers.iter().position(|(finger, _)| *finger == id)?;
        Some(self.fingers.remove(index).1)
    }
}

/// Translates iced window events into controller input.
#[derive(Debug, Clone, Default)]
pub struct EventTranslator {
    touches: TouchTracker,
    cursor: Option<Point>,
}

impl EventTranslator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps one event, with positions relative to the surface `bounds`.
    ///
    /// Presses and wheel events outside the bounds are dropped; moves and
    /// releases pass through so a drag can leave the surface.
    pub fn translate(&mut self, event: &iced::Event, bounds: Rectangle) -> Option<GestureInput> {
        let origin = bounds.position();
        match event {
            iced::Event::Mouse(mouse_event) => match *mouse_event {
                mouse::Event::CursorMoved { position } => {
                    self.cursor = Some(position);
                    Some(GestureInput::MouseMove {
                        position: relative(position, origin),
                    })
                }
                mouse::Event::CursorLeft => {
                    self.cursor = None;
                    Some(GestureInput::MouseLeave)
                }
                mouse::Event::ButtonPressed(button) => {
                    let position = self.cursor.filter(|p| bounds.contains(*p))?;
                    Some(GestureInput::MouseDown {
                        position: relative(position, origin),
                        button,
                    })
                }
                mouse::Event::ButtonReleased(button) => {
                    Some(GestureInput::MouseUp { button })
                }
                mouse::Event::WheelScrolled { delta } => {
                    self.cursor.filter(|p| bounds.contains(*p))?;
                    Some(GestureInput::Wheel {
                        delta_y: scroll_steps(&delta),
                    })
                }
                _ => None,
            },
            iced::Event::Touch(touch_event) => {
                let on_surface = match touch_event {
                    touch::Event::FingerPressed { position, .. } => bounds.contains(*position),
                    _ => true,
                };
                self.touches.handle(touch_event, origin, on_surface)
            }
            _ => None,
        }
    }

    /// Translates `event` and feeds it to `controller`.
    pub fn dispatch<S: Surface, F: FrameScheduler>(
        &mut self,
        controller: &mut PanZoomController<S, F>,
        event: &iced::Event,
        bounds: Rectangle,
        now: Instant,
    ) -> Status {
        match self.translate(event, bounds) {
            Some(input) => controller.handle_input(input, now),
            None => Status::Ignored,
        }
    }
}

fn relative(position: Point, origin: Point) -> Point {
    Point::new(position.x - origin.x, position.y - origin.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PanZoomConfig;
    use crate::pan_zoom::ViewportSurface;
    use crate::test_utils::assert_abs_diff_eq;
    use iced::Size;

    fn bounds() -> Rectangle {
        Rectangle::new(Point::new(100.0, 50.0), Size::new(800.0, 400.0))
    }

    fn finger(
        id: u64,
        event: fn(touch::Finger, Point) -> touch::Event,
        x: f32,
        y: f32,
    ) -> iced::Event {
        iced::Event::Touch(event(touch::Finger(id), Point::new(x, y)))
    }

    fn pressed(id: touch::Finger, position: Point) -> touch::Event {
        touch::Event::FingerPressed { id, position }
    }

    fn moved(id: touch::Finger, position: Point) -> touch::Event {
        touch::Event::FingerMoved { id, position }
    }

    fn lifted(id: touch::Finger, position: Point) -> touch::Event {
        touch::Event::FingerLifted { id, position }
    }

    fn lost(id: touch::Finger, position: Point) -> touch::Event {
        touch::Event::FingerLost { id, position }
    }

    #[test]
    fn scroll_steps_normalizes_pixels() {
        assert_abs_diff_eq!(scroll_steps(&mouse::ScrollDelta::Lines { x: 0.0, y: 2.0 }), 2.0);
        assert_abs_diff_eq!(
            scroll_steps(&mouse::ScrollDelta::Pixels { x: 0.0, y: -60.0 }),
            -0.5
        );
    }

    #[test]
    fn press_is_relative_to_bounds() {
        let mut translator = EventTranslator::new();
        translator.translate(
            &iced::Event::Mouse(mouse::Event::CursorMoved {
                position: Point::new(150.0, 80.0),
            }),
            bounds(),
        );
        let input = translator.translate(
            &iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            bounds(),
        );
        assert_eq!(
            input,
            Some(GestureInput::MouseDown {
                position: Point::new(50.0, 30.0),
                button: mouse::Button::Left
            })
        );
    }

    #[test]
    fn release_carries_the_button() {
        let mut translator = EventTranslator::new();
        let input = translator.translate(
            &iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Right)),
            bounds(),
        );
        assert_eq!(
            input,
            Some(GestureInput::MouseUp {
                button: mouse::Button::Right
            })
        );
    }

    #[test]
    fn press_and_wheel_outside_bounds_are_dropped() {
        let mut translator = EventTranslator::new();
        translator.translate(
            &iced::Event::Mouse(mouse::Event::CursorMoved {
                position: Point::new(10.0, 10.0),
            }),
            bounds(),
        );
        assert_eq!(
            translator.translate(
                &iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
                bounds()
            ),
            None
        );
        assert_eq!(
            translator.translate(
                &iced::Event::Mouse(mouse::Event::WheelScrolled {
                    delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 }
                }),
                bounds()
            ),
            None
        );
    }

    #[test]
    fn touch_tracker_reports_all_contacts() {
        let mut translator = EventTranslator::new();
        let first = translator.translate(&finger(1, pressed, 200.0, 100.0), bounds());
        assert_eq!(
            first,
            Some(GestureInput::TouchStart {
                touches: vec![Point::new(100.0, 50.0)]
            })
        );

        let second = translator.translate(&finger(2, pressed, 300.0, 100.0), bounds());
        assert_eq!(
            second,
            Some(GestureInput::TouchStart {
                touches: vec![Point::new(100.0, 50.0), Point::new(200.0, 50.0)]
            })
        );

        let moving = translator.translate(&finger(2, moved, 340.0, 100.0), bounds());
        assert_eq!(
            moving,
            Some(GestureInput::TouchMove {
                touches: vec![Point::new(100.0, 50.0), Point::new(240.0, 50.0)]
            })
        );

        let after_lift = translator.translate(&finger(1, lifted, 200.0, 100.0), bounds());
        assert_eq!(
            after_lift,
            Some(GestureInput::TouchEnd {
                touches: vec![Point::new(240.0, 50.0)]
            })
        );
    }

    #[test]
    fn losing_last_finger_cancels() {
        let mut tracker = TouchTracker::new();
        tracker.handle(&pressed(touch::Finger(7), Point::ORIGIN), Point::ORIGIN, true);
        assert_eq!(
            tracker.handle(&lost(touch::Finger(7), Point::ORIGIN), Point::ORIGIN, true),
            Some(GestureInput::TouchCancel)
        );
        assert!(tracker.is_empty());
    }

    #[test]
    fn unknown_finger_is_ignored() {
        let mut tracker = TouchTracker::new();
        assert_eq!(
            tracker.handle(&moved(touch::Finger(3), Point::ORIGIN), Point::ORIGIN, true),
            None
        );
        assert_eq!(
            tracker.handle(&pressed(touch::Finger(3), Point::ORIGIN), Point::ORIGIN, false),
            None
        );
        assert_eq!(tracker.len(), 0);
    }

    #[test]
    fn dispatch_feeds_the_controller() {
        let mut controller = PanZoomController::new(
            PanZoomConfig::default(),
            ViewportSurface::new(bounds()),
        )
        .expect("valid config");
        let mut translator = EventTranslator::new();
        let now = Instant::now();

        translator.dispatch(
            &mut controller,
            &iced::Event::Mouse(mouse::Event::CursorMoved {
                position: Point::new(500.0, 250.0),
            }),
            bounds(),
            now,
        );
        let status = translator.dispatch(
            &mut controller,
            &iced::Event::Mouse(mouse::Event::WheelScrolled {
                delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
            }),
            bounds(),
            now,
        );

        assert_eq!(status, Status::Captured);
        assert_abs_diff_eq!(controller.zoom(), 1.1, epsilon = 1e-6);
    }
}
