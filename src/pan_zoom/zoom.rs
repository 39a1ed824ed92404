// SPDX-License-Identifier: MPL-2.0
//! Zoom bounds and precision.
//!
//! This module handles the numeric rules every zoom value goes through:
//! - Clamping to the configured `[min, max]` range
//! - Rounding to the decimal precision implied by the zoom step

use crate::config::PanZoomConfig;

/// Largest number of decimals a zoom value is rounded to.
const MAX_DECIMALS: u32 = 6;

/// Zoom step whose decimal precision drives rounding.
///
/// A step of `0.1` rounds zoom values to one decimal, `1` to integers
/// and `0.25` to two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep {
    value: f32,
    decimals: u32,
}

impl ZoomStep {
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self {
            value,
            decimals: decimals_of(value),
        }
    }

    /// Returns the raw step value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.value
    }

    /// Returns the number of decimals zoom values are rounded to.
    #[must_use]
    pub fn decimals(self) -> u32 {
        self.decimals
    }

    /// Rounds a value to this step's precision.
    #[must_use]
    pub fn round(self, value: f32) -> f32 {
        let factor = 10f32.powi(self.decimals as i32);
        (value * factor).round() / factor
    }
}

/// Validated zoom range with its rounding precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomBounds {
    min: f32,
    max: f32,
    step: ZoomStep,
}

impl ZoomBounds {
    /// Builds bounds from an already validated configuration.
    ///
    /// Bounds finer than the step precision are narrowed to the closest
    /// reachable values, so `is_min`/`is_max` hold at the zoom floor and ceiling.
    #[must_use]
    pub fn from_config(config: &PanZoomConfig) -> Self {
        let raw = Self {
            min: config.min_zoom,
            max: config.max_zoom,
            step: ZoomStep::new(config.zoom_step),
        };
        Self {
            min: raw.normalize(raw.min),
            max: raw.normalize(raw.max),
            ..raw
        }
    }

    #[must_use]
    pub fn min(self) -> f32 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f32 {
        self.max
    }

    #[must_use]
    pub fn step(self) -> ZoomStep {
        self.step
    }

    /// Clamps to `[min, max]`, then rounds to the step precision.
    ///
    /// Non-finite input falls back to `min`.
    #[must_use]
    pub fn normalize(self, zoom: f32) -> f32 {
        if !zoom.is_finite() {
            return self.min;
        }
        self.step
            .round(zoom.clamp(self.min, self.max))
            .clamp(self.min, self.max)
    }

    #[must_use]
    pub fn is_min(self, zoom: f32) -> bool {
        zoom <= self.min
    }

    #[must_use]
    pub fn is_max(self, zoom: f32) -> bool {
        zoom >= self.max
    }
}

/// Counts the decimals of a step using its shortest decimal rendering.
fn decimals_of(step: f32) -> u32 {
    let rendered = format!("{step}");
    rendered
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len() as u32)
        .min(MAX_DECIMALS)
}
