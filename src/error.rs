// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(ConfigError),
}

/// Specific reasons a pan/zoom configuration is rejected.
///
/// Every variant describes a value that would corrupt the clamp formulas
/// used by the controller, so construction fails instead of degrading.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `min_zoom` is not strictly below `max_zoom`.
    InvertedZoomBounds { min: f32, max: f32 },

    /// A zoom bound is not a finite, positive number.
    InvalidZoomBound(f32),

    /// The zoom step is not a finite, positive number.
    InvalidZoomStep(f32),

    /// The wheel velocity is not a finite, positive number.
    InvalidScrollVelocity(f32),

    /// A duration is negative or not finite.
    InvalidDuration { name: &'static str, value: f32 },

    /// The settings file could not be parsed or serialized.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvertedZoomBounds { min, max } => {
                write!(f, "min zoom ({}) must be lower than max zoom ({})", min, max)
            }
            ConfigError::InvalidZoomBound(value) => write!(f, "invalid zoom bound: {}", value),
            ConfigError::InvalidZoomStep(value) => write!(f, "invalid zoom step: {}", value),
            ConfigError::InvalidScrollVelocity(value) => {
                write!(f, "invalid scroll velocity: {}", value)
            }
            ConfigError::InvalidDuration { name, value } => {
                write!(f, "invalid {} duration: {}", name, value)
            }
            ConfigError::Parse(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(ConfigError::Parse(err.to_string()))
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(ConfigError::Parse(err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
