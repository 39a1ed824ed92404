// SPDX-License-Identifier: MPL-2.0
//! Transform state and pan geometry.
//!
//! Pan is stored as a fraction of the zoomed content's excess size
//! (`dimension × (zoom − 1)`), so the permitted range is `[-0.5, 0.5]` on
//! each axis whatever the zoom: at ±0.5 a content edge touches the matching
//! viewport edge. The absolute pixel offset of the content centre is
//! `fraction × dimension × (zoom − 1)`.

use super::orientation::Orientation;
use iced::{Size, Vector};

/// Largest pan fraction on either axis.
pub const MAX_TRANSLATE: f32 = 0.5;

/// Fractions closer than this are considered equal.
const TRANSLATE_EPSILON: f32 = 1e-6;

/// Below this many pixels of slack an axis is not draggable.
const DRAGGABLE_SLACK_PX: f32 = 0.5;

/// Pan offset as a fraction of the zoomed excess size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Translate {
    pub pos_x: f32,
    pub pos_y: f32,
}

impl Translate {
    pub const ZERO: Self = Self {
        pos_x: 0.0,
        pos_y: 0.0,
    };

    #[must_use]
    pub fn new(pos_x: f32, pos_y: f32) -> Self {
        Self { pos_x, pos_y }
    }

    /// Converts an absolute pixel offset into a clamped fraction.
    ///
    /// At `zoom <= 1` there is no excess to pan into, so the result is zero.
    #[must_use]
    pub fn from_pixels(pixels: Vector, viewport: Size, zoom: f32) -> Self {
        Self {
            pos_x: fraction_of(pixels.x, viewport.width, zoom),
            pos_y: fraction_of(pixels.y, viewport.height, zoom),
        }
    }

    /// Absolute pixel offset of the content centre.
    #[must_use]
    pub fn to_pixels(self, viewport: Size, zoom: f32) -> Vector {
        Vector::new(
            self.pos_x * excess(viewport.width, zoom),
            self.pos_y * excess(viewport.height, zoom),
        )
    }

    #[must_use]
    pub fn approx_eq(self, other: Self) -> bool {
        (self.pos_x - other.pos_x).abs() < TRANSLATE_EPSILON
            && (self.pos_y - other.pos_y).abs() < TRANSLATE_EPSILON
    }
}

/// Cursor shown over the surface, derived from which axes can still pan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorAffordance {
    #[default]
    Auto,
    Move,
    EwResize,
    NsResize,
}

impl CursorAffordance {
    /// Picks the affordance from the per-axis slack (in content axes),
    /// then maps it to screen axes.
    #[must_use]
    pub fn from_slack(slack: Vector, orientation: Orientation) -> Self {
        let slack = orientation.map_vector(slack);
        let horizontal = slack.x > DRAGGABLE_SLACK_PX;
        let vertical = slack.y > DRAGGABLE_SLACK_PX;
        match (horizontal, vertical) {
            (true, true) => Self::Move,
            (true, false) => Self::EwResize,
            (false, true) => Self::NsResize,
            (false, false) => Self::Auto,
        }
    }

    /// Maps to the closest iced mouse interaction.
    #[must_use]
    pub fn interaction(self) -> iced::mouse::Interaction {
        use iced::mouse::Interaction;
        match self {
            Self::Auto => Interaction::Idle,
            Self::Move => Interaction::Grab,
            Self::EwResize => Interaction::ResizingHorizontally,
            Self::NsResize => Interaction::ResizingVertically,
        }
    }
}

/// Everything the surface needs to paint the transformed content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    pub zoom: f32,
    pub translate: Translate,
    pub transition_seconds: f32,
    pub orientation: Orientation,
}

impl TransformState {
    #[must_use]
    pub fn new(zoom: f32) -> Self {
        Self {
            zoom,
            translate: Translate::ZERO,
            transition_seconds: 0.0,
            orientation: Orientation::Natural,
        }
    }

    #[must_use]
    pub fn rotated(&self) -> bool {
        self.orientation.is_rotated()
    }

    /// Pan fraction in screen axes, as written to the surface.
    #[must_use]
    pub fn screen_translate(&self) -> Translate {
        let (pos_x, pos_y) = self
            .orientation
            .map(self.translate.pos_x, self.translate.pos_y);
        Translate::new(pos_x, pos_y)
    }
}

/// Pixels by which zoomed content exceeds the viewport along one axis.
#[must_use]
pub fn excess(dimension: f32, zoom: f32) -> f32 {
    (dimension * (zoom - 1.0)).max(0.0)
}

/// Maximum pixel offset of the content centre per axis.
#[must_use]
pub fn slack(viewport: Size, zoom: f32) -> Vector {
    Vector::new(
        excess(viewport.width, zoom) * MAX_TRANSLATE,
        excess(viewport.height, zoom) * MAX_TRANSLATE,
    )
}

/// Clamps one axis of a pan so separation from the viewport edge never grows.
///
/// Inside the limit the target is clamped to it. Outside the limit (content
/// already detached) the offset may only move back toward the edge.
#[must_use]
pub fn clamp_axis(current: f32, target: f32, limit: f32) -> f32 {
    if current > limit {
        target.clamp(-limit, current)
    } else if current < -limit {
        target.clamp(current, limit)
    } else {
        target.clamp(-limit, limit)
    }
}

fn fraction_of(pixels: f32, dimension: f32, zoom: f32) -> f32 {
    let excess = excess(dimension, zoom);
    if excess <= f32::EPSILON || !pixels.is_finite() {
        return 0.0;
    }
    (pixels / excess).clamp(-MAX_TRANSLATE, MAX_TRANSLATE)
}
