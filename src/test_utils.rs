// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers.
//!
//! Zoom, pan fractions and pixel offsets are all `f32`, so unit tests compare
//! them with the `approx` assertion macros rather than `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for pixel offsets that went through a fraction round-trip.
pub const PIXEL_EPSILON: f32 = 1e-3;
