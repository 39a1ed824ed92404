// SPDX-License-Identifier: MPL-2.0
//! This module handles the pan/zoom configuration, including validation and
//! loading/saving it from a `panzoom.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_panzoom::config::{self, PanZoomConfig};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.allow_touch_events = true;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("panzoom.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert!(loaded.allow_touch_events);
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "panzoom.toml";
const APP_NAME: &str = "IcedPanZoom";

/// Immutable per-instance options of a pan/zoom controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanZoomConfig {
    pub initial_zoom: f32,
    #[serde(alias = "min")]
    pub min_zoom: f32,
    #[serde(alias = "max")]
    pub max_zoom: f32,
    pub zoom_step: f32,
    pub scroll_velocity: f32,
    /// Transition of animated operations, in seconds.
    pub anim_duration: f32,
    /// Inertial window after release, in milliseconds.
    pub deceleration_duration: u32,
    /// Maximum delay between the two touches of a double-tap, in milliseconds.
    pub double_touch_max_delay: u32,
    pub allow_pan: bool,
    pub allow_zoom: bool,
    pub allow_wheel: bool,
    pub allow_touch_events: bool,
    /// Mouse buttons (0 = left, 1 = middle, 2 = right, ...) that never start a drag.
    pub ignored_mouse_buttons: Vec<u16>,
}

impl Default for PanZoomConfig {
    fn default() -> Self {
        Self {
            initial_zoom: DEFAULT_INITIAL_ZOOM,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            zoom_step: DEFAULT_ZOOM_STEP,
            scroll_velocity: DEFAULT_SCROLL_VELOCITY,
            anim_duration: DEFAULT_ANIM_DURATION_SECS,
            deceleration_duration: DEFAULT_DECELERATION_DURATION_MS,
            double_touch_max_delay: DEFAULT_DOUBLE_TOUCH_MAX_DELAY_MS,
            allow_pan: true,
            allow_zoom: true,
            allow_wheel: true,
            allow_touch_events: false,
            ignored_mouse_buttons: Vec::new(),
        }
    }
}

impl PanZoomConfig {
    /// Checks every value the clamp formulas depend on.
    ///
    /// `initial_zoom` is not checked here; the controller clamps it into
    /// the bounds.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for bound in [self.min_zoom, self.max_zoom] {
            if !bound.is_finite() || bound <= 0.0 {
                return Err(ConfigError::InvalidZoomBound(bound));
            }
        }
        if self.min_zoom >= self.max_zoom {
            return Err(ConfigError::InvertedZoomBounds {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        if !self.zoom_step.is_finite() || self.zoom_step <= 0.0 {
            return Err(ConfigError::InvalidZoomStep(self.zoom_step));
        }
        if !self.scroll_velocity.is_finite() || self.scroll_velocity <= 0.0 {
            return Err(ConfigError::InvalidScrollVelocity(self.scroll_velocity));
        }
        if !self.anim_duration.is_finite() || self.anim_duration < 0.0 {
            return Err(ConfigError::InvalidDuration {
                name: "animation",
                value: self.anim_duration,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn deceleration(&self) -> Duration {
        Duration::from_millis(u64::from(self.deceleration_duration))
    }

    #[must_use]
    pub fn double_tap_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.double_touch_max_delay))
    }

    /// Minimum time between two consumed double-taps.
    #[must_use]
    pub fn double_tap_cooldown(&self) -> Duration {
        self.double_tap_delay().mul_f32(DOUBLE_TAP_COOLDOWN_FACTOR)
    }

    #[must_use]
    pub fn ignores_button(&self, index: u16) -> bool {
        self.ignored_mouse_buttons.contains(&index)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<PanZoomConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(PanZoomConfig::default())
}

pub fn save(config: &PanZoomConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads and validates a configuration file. Missing keys take their defaults.
pub fn load_from_path(path: &Path) -> Result<PanZoomConfig> {
    let content = fs::read_to_string(path)?;
    let config: PanZoomConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

pub fn save_to_path(config: &PanZoomConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn default_config_is_valid() {
        let config = PanZoomConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_zoom, DEFAULT_MAX_ZOOM);
        assert!(!config.allow_touch_events);
    }

    #[test]
    fn validate_rejects_inverted_bounds() {
        let config = PanZoomConfig {
            min_zoom: 4.0,
            max_zoom: 4.0,
            ..PanZoomConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedZoomBounds { .. })
        ));
    }

    #[test]
    fn validate_rejects_zero_step_and_negative_animation() {
        let zero_step = PanZoomConfig {
            zoom_step: 0.0,
            ..PanZoomConfig::default()
        };
        assert!(matches!(
            zero_step.validate(),
            Err(ConfigError::InvalidZoomStep(_))
        ));

        let negative_anim = PanZoomConfig {
            anim_duration: -0.5,
            ..PanZoomConfig::default()
        };
        assert!(matches!(
            negative_anim.validate(),
            Err(ConfigError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn double_tap_cooldown_is_two_and_a_half_delays() {
        let config = PanZoomConfig::default();
        assert_eq!(config.double_tap_cooldown(), Duration::from_millis(750));
    }

    #[test]
    fn save_and_load_round_trip_preserves_flags() {
        let config = PanZoomConfig {
            allow_touch_events: true,
            ignored_mouse_buttons: vec![1, 2],
            ..PanZoomConfig::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("panzoom.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_accepts_short_bound_aliases_and_partial_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("panzoom.toml");
        fs::write(&config_path, "min = 1.0\nmax = 4.0\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded.max_zoom, 4.0);
        assert_eq!(loaded.zoom_step, DEFAULT_ZOOM_STEP);
    }

    #[test]
    fn load_rejects_inverted_bounds() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("panzoom.toml");
        fs::write(&config_path, "min_zoom = 8.0\nmax_zoom = 2.0\n").expect("failed to write toml");

        let err = load_from_path(&config_path).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvertedZoomBounds { .. })
        ));
    }

    #[test]
    fn load_reports_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("panzoom.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(load_from_path(&config_path).is_err());
    }
}
