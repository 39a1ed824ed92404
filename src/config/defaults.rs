// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Zoom factor bounds, step and wheel velocity
//! - **Timing**: Animation, deceleration and tap windows
//! - **Diagnostics**: Gesture trail capacity

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom factor applied when the controller is created (1.0 = unscaled).
pub const DEFAULT_INITIAL_ZOOM: f32 = 1.0;

/// Default lower zoom bound.
pub const DEFAULT_MIN_ZOOM: f32 = 1.0;

/// Default upper zoom bound.
pub const DEFAULT_MAX_ZOOM: f32 = 8.0;

/// Default zoom step. Its decimal precision also drives zoom rounding.
pub const DEFAULT_ZOOM_STEP: f32 = 0.1;

/// Zoom change per mouse wheel notch.
pub const DEFAULT_SCROLL_VELOCITY: f32 = 0.1;

/// Distance (in pixels) between two fingers that maps to one zoom unit.
pub const PINCH_DISTANCE_DIVISOR: f32 = 100.0;

/// Upper bound of the multiplier used to pull a point toward the viewport
/// centre when zooming in on it.
pub const ANCHOR_OVERFLOW_GUARD: f32 = 3.5;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Transition applied to animated operations (in seconds).
pub const DEFAULT_ANIM_DURATION_SECS: f32 = 0.25;

/// Transition applied to wheel zoom (in seconds).
pub const WHEEL_TRANSITION_SECS: f32 = 0.1;

/// Length of the inertial window after a drag is released (in milliseconds).
pub const DEFAULT_DECELERATION_DURATION_MS: u32 = 750;

/// Maximum delay between two touches forming a double-tap (in milliseconds).
pub const DEFAULT_DOUBLE_TOUCH_MAX_DELAY_MS: u32 = 300;

/// Cooldown after a consumed double-tap, as a multiple of the double-tap delay.
pub const DOUBLE_TAP_COOLDOWN_FACTOR: f32 = 2.5;

/// A touch released sooner than this after it started is a tap (in milliseconds).
pub const TAP_MAX_DURATION_MS: u64 = 200;

/// Deceleration stops once the per-frame shift drops to this many pixels.
pub const DECELERATION_MIN_SHIFT_PX: f32 = 1.0;

/// Interval of the fallback frame clock (in milliseconds, ~60 FPS).
pub const FRAME_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of gesture diagnostics retained.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = 256;

/// Minimum diagnostics capacity.
pub const MIN_DIAGNOSTICS_CAPACITY: usize = 16;

/// Maximum diagnostics capacity.
pub const MAX_DIAGNOSTICS_CAPACITY: usize = 4096;
