// SPDX-License-Identifier: MPL-2.0
//! Coordinate orientation of the controlled surface.
//!
//! When a player emulates a landscape layout by rotating its surface 90°
//! without changing the actual layout, screen X corresponds to content Y
//! and vice versa. Every input read and every output write goes through
//! [`Orientation::map`], so gesture code never handles the swap itself.
//!
//! # Example
//!
//! ```
//! use iced_panzoom::pan_zoom::Orientation;
//! use iced::Point;
//!
//! let rotated = Orientation::Rotated;
//! assert_eq!(rotated.map_point(Point::new(10.0, 20.0)), Point::new(20.0, 10.0));
//! assert_eq!(Orientation::Natural.map_point(Point::new(10.0, 20.0)), Point::new(10.0, 20.0));
//! ```

use iced::{Point, Size, Vector};

/// Orientation of the surface relative to the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Screen axes match content axes.
    #[default]
    Natural,
    /// Screen X is content Y (90° simulated rotation).
    Rotated,
}

impl Orientation {
    #[must_use]
    pub fn from_rotated(rotated: bool) -> Self {
        if rotated {
            Self::Rotated
        } else {
            Self::Natural
        }
    }

    /// Returns true if axes are swapped.
    #[must_use]
    pub fn is_rotated(self) -> bool {
        self == Self::Rotated
    }

    /// The single coordinate mapping. The swap is its own inverse, so the
    /// same function converts screen → content and content → screen.
    #[must_use]
    pub fn map(self, x: f32, y: f32) -> (f32, f32) {
        match self {
            Self::Natural => (x, y),
            Self::Rotated => (y, x),
        }
    }

    #[must_use]
    pub fn map_point(self, point: Point) -> Point {
        let (x, y) = self.map(point.x, point.y);
        Point::new(x, y)
    }

    #[must_use]
    pub fn map_vector(self, vector: Vector) -> Vector {
        let (x, y) = self.map(vector.x, vector.y);
        Vector::new(x, y)
    }

    #[must_use]
    pub fn map_size(self, size: Size) -> Size {
        let (width, height) = self.map(size.width, size.height);
        Size::new(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_is_identity() {
        let v = Vector::new(3.0, -4.0);
        assert_eq!(Orientation::Natural.map_vector(v), v);
    }

    #[test]
    fn rotated_swaps_axes() {
        assert_eq!(
            Orientation::Rotated.map_size(Size::new(1920.0, 1080.0)),
            Size::new(1080.0, 1920.0)
        );
        assert_eq!(
            Orientation::Rotated.map_vector(Vector::new(3.0, -4.0)),
            Vector::new(-4.0, 3.0)
        );
    }

    #[test]
    fn mapping_twice_restores_input() {
        let p = Point::new(12.5, 80.0);
        let rotated = Orientation::Rotated;
        assert_eq!(rotated.map_point(rotated.map_point(p)), p);
    }

    #[test]
    fn from_rotated_flag() {
        assert!(Orientation::from_rotated(true).is_rotated());
        assert!(!Orientation::from_rotated(false).is_rotated());
        assert_eq!(Orientation::default(), Orientation::Natural);
    }
}
