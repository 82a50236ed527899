//! Config Module
//!
//! Tuning for both controllers, loadable from JSON.
//!
//! ```json
//! {
//!   "movement": { "walk_speed": 4.0, "max_jumps": 1 },
//!   "camera":   { "offset": [0.0, 2.5, -6.0], "max_zoom": 12.0 }
//! }
//! ```
//!
//! Missing sections and fields take their defaults. Loading validates the
//! result, so a config that parses but makes no sense is rejected with
//! [`ConfigError::Invalid`].

pub mod camera_config;
pub mod movement_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use camera_config::{DEFAULT_VERTICAL_ANGLE, OrbitCameraConfig};
pub use movement_config::MovementConfig;

/// Errors that can occur while loading a rig configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    Io(std::io::Error),
    /// JSON syntax or type error.
    Json(serde_json::Error),
    /// Parsed, but a value is out of range.
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Json(e) => write!(f, "JSON error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

pub(crate) fn ensure(condition: bool, message: &str) -> Result<(), ConfigError> {
    if condition {
        Ok(())
    } else {
        Err(ConfigError::Invalid(message.to_string()))
    }
}

pub(crate) fn ensure_finite(name: &str, value: f32) -> Result<(), ConfigError> {
    ensure(value.is_finite(), &format!("{name} must be finite"))
}

/// Configuration for the whole rig.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    /// Character movement tuning
    pub movement: MovementConfig,
    /// Orbit camera tuning
    pub camera: OrbitCameraConfig,
}

impl RigConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: RigConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded rig config from {}", path.display());
        Ok(config)
    }

    /// Pretty-printed JSON for this configuration.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate both sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.movement.validate()?;
        self.camera.validate()
    }
}
