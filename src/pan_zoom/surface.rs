// SPDX-License-Identifier: MPL-2.0
//! The element being transformed.
//!
//! The controller never paints anything. It reads the viewport size from a
//! [`Surface`] on demand and writes the resulting transform and cursor back.

use super::transform::{CursorAffordance, TransformState};
use iced::{Rectangle, Size};

/// The controlled element.
pub trait Surface {
    /// Current viewport size in screen axes, or `None` when unmounted.
    fn viewport_size(&self) -> Option<Size>;

    /// Writes the transform to paint.
    fn apply_transform(&mut self, transform: &TransformState);

    /// Writes the cursor affordance.
    fn set_cursor(&mut self, cursor: CursorAffordance);

    /// Called once when the controller is destroyed.
    fn detach(&mut self) {}
}

/// Surface backed by viewport bounds the host reports from layout.
///
/// An iced view reads [`ViewportSurface::transform`] and
/// [`ViewportSurface::cursor`] when drawing the video frame.
#[derive(Debug, Clone, Default)]
pub struct ViewportSurface {
    bounds: Option<Rectangle>,
    transform: Option<TransformState>,
    cursor: CursorAffordance,
    detached: bool,
}

impl ViewportSurface {
    #[must_use]
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds: Some(bounds),
            ..Self::default()
        }
    }

    /// Convenience for a surface anchored at the origin.
    #[must_use]
    pub fn with_size(width: f32, height: f32) -> Self {
        Self::new(Rectangle::new(iced::Point::ORIGIN, Size::new(width, height)))
    }

    /// Updates the viewport bounds from layout.
    ///
    /// The pan is stored as a fraction, so it stays within the new slack
    /// without any re-clamping.
    pub fn update_bounds(&mut self, bounds: Rectangle) {
        self.bounds = Some(bounds);
    }

    /// Marks the element as unmounted; the controller then ignores input.
    pub fn unmount(&mut self) {
        self.bounds = None;
    }

    #[must_use]
    pub fn bounds(&self) -> Option<Rectangle> {
        self.bounds
    }

    /// Last transform written by the controller.
    #[must_use]
    pub fn transform(&self) -> Option<&TransformState> {
        self.transform.as_ref()
    }

    #[must_use]
    pub fn cursor(&self) -> CursorAffordance {
        self.cursor
    }

    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.detached
    }
}

impl Surface for ViewportSurface {
    fn viewport_size(&self) -> Option<Size> {
        if self.detached {
            return None;
        }
        self.bounds
            .map(|bounds| bounds.size())
            .filter(|size| size.width > 0.0 && size.height > 0.0)
    }

    fn apply_transform(&mut self, transform: &TransformState) {
        if !self.detached {
            self.transform = Some(*transform);
        }
    }

    fn set_cursor(&mut self, cursor: CursorAffordance) {
        if !self.detached {
            self.cursor = cursor;
        }
    }

    fn detach(&mut self) {
        self.detached = true;
    }
}
