// SPDX-License-Identifier: MPL-2.0
//! Gesture input and per-interaction session state.
//!
//! Raw input arrives as [`GestureInput`] in screen coordinates. A
//! [`GestureSession`] lives for one interaction (press to release) and
//! tracks the last cursor and shift used to feed pan moves and seed
//! deceleration.

use iced::{mouse, Point, Vector};
use std::time::{Duration, Instant};

/// Host-neutral input consumed by the controller.
///
/// Touch variants carry every contact currently on the surface, not only
/// the one that changed.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureInput {
    MouseDown { position: Point, button: mouse::Button },
    MouseMove { position: Point },
    MouseUp { button: mouse::Button },
    MouseLeave,
    /// Vertical wheel delta; positive scrolls up (zoom in).
    Wheel { delta_y: f32 },
    TouchStart { touches: Vec<Point> },
    TouchMove { touches: Vec<Point> },
    /// Contacts remaining after a finger was lifted.
    TouchEnd { touches: Vec<Point> },
    TouchCancel,
}

impl GestureInput {
    #[must_use]
    pub fn is_touch(&self) -> bool {
        matches!(
            self,
            Self::TouchStart { .. }
                | Self::TouchMove { .. }
                | Self::TouchEnd { .. }
                | Self::TouchCancel
        )
    }
}

/// Index of a mouse button, matching the ordering of `ignored_mouse_buttons`.
#[must_use]
pub fn button_index(button: mouse::Button) -> u16 {
    match button {
        mouse::Button::Left => 0,
        mouse::Button::Middle => 1,
        mouse::Button::Right => 2,
        mouse::Button::Back => 3,
        mouse::Button::Forward => 4,
        mouse::Button::Other(index) => index,
    }
}

/// Observable state of the gesture machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
    Pinching,
    Decelerating,
}

/// What started the current interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Mouse,
    SingleTouch,
    PinchTouch,
}

/// Distance memory of a two-finger pinch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchTrack {
    pub last_distance: f32,
    /// Unrounded zoom accumulated over the pinch.
    pub zoom: f32,
}

/// State of one interaction, from press to release.
///
/// Cursor and shift are stored in content coordinates (already mapped
/// through the orientation).
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSession {
    pub kind: GestureKind,
    pub last_cursor: Option<Point>,
    pub last_shift: Option<Vector>,
    pub started_at: Instant,
    pub pinch: Option<PinchTrack>,
}

impl GestureSession {
    #[must_use]
    pub fn drag(kind: GestureKind, origin: Point, now: Instant) -> Self {
        Self {
            kind,
            last_cursor: Some(origin),
            last_shift: None,
            started_at: now,
            pinch: None,
        }
    }

    #[must_use]
    pub fn pinch(distance: f32, zoom: f32, now: Instant) -> Self {
        Self {
            kind: GestureKind::PinchTouch,
            last_cursor: None,
            last_shift: None,
            started_at: now,
            pinch: Some(PinchTrack {
                last_distance: distance,
                zoom,
            }),
        }
    }

    /// Records a new cursor position and returns the shift since the last one.
    pub fn advance(&mut self, cursor: Point) -> Option<Vector> {
        let last = self.last_cursor.replace(cursor)?;
        let shift = cursor - last;
        self.last_shift = Some(shift);
        Some(shift)
    }
}

/// Euclidean distance between the first two contacts.
#[must_use]
pub fn pinch_distance(touches: &[Point]) -> Option<f32> {
    match touches {
        [a, b, ..] => Some(a.distance(*b)),
        _ => None,
    }
}

/// Detects touch double-taps with a cooldown that prevents a third tap
/// from re-triggering.
#[derive(Debug, Clone, Default)]
pub struct DoubleTapDetector {
    last_touch: Option<Instant>,
    last_consumed: Option<Instant>,
}

impl DoubleTapDetector {
    /// Registers a touch start and returns whether it completes a double-tap.
    pub fn register(&mut self, now: Instant, max_delay: Duration, cooldown: Duration) -> bool {
        let within_delay = self
            .last_touch
            .is_some_and(|t| now.saturating_duration_since(t) <= max_delay);
        let cooled_down = self
            .last_consumed
            .is_none_or(|t| now.saturating_duration_since(t) >= cooldown);

        self.last_touch = Some(now);

        if within_delay && cooled_down {
            self.last_consumed = Some(now);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.last_touch = None;
        self.last_consumed = None;
    }
}
