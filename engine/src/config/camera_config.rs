//! Orbit Camera Configuration
//!
//! Tuning for the orbit camera controller. Angles are in degrees, distances
//! in meters, rates in 1/s.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::{ConfigError, ensure, ensure_finite};
use crate::math::clamp_range;
use crate::physics::LayerMask;

/// Vertical angle the camera relaxes back to when free-look ends (degrees)
pub const DEFAULT_VERTICAL_ANGLE: f32 = 20.0;

/// Orbit camera tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitCameraConfig {
    /// Initial camera offset from the target. Its direction is the reference
    /// orbit direction; its length seeds the zoom distance.
    pub offset: Vec3,
    /// Degrees of yaw per unit of horizontal mouse delta
    pub sensitivity_x: f32,
    /// Degrees of pitch per unit of vertical mouse delta
    pub sensitivity_y: f32,
    /// Lowest vertical angle (degrees)
    pub min_vertical_angle: f32,
    /// Highest vertical angle (degrees)
    pub max_vertical_angle: f32,
    /// Rate at which offset and vertical angle relax after free-look
    pub return_speed: f32,
    /// Zoom distance change per unit of scroll
    pub zoom_speed: f32,
    /// Closest zoom distance (m)
    pub min_zoom: f32,
    /// Farthest zoom distance (m)
    pub max_zoom: f32,
    /// Rate at which the zoom distance approaches its target
    pub zoom_smoothing: f32,
    /// Rate at which the camera position and rotation follow their targets
    pub smooth_speed: f32,
    /// Pull the camera in front of obstacles
    pub collision_enabled: bool,
    /// Radius of the swept sphere (m)
    pub collision_radius: f32,
    /// Layers that block the camera
    pub collision_mask: LayerMask,
}

impl Default for OrbitCameraConfig {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 2.0, -5.0),
            sensitivity_x: 3.0,
            sensitivity_y: 2.0,
            min_vertical_angle: -20.0,
            max_vertical_angle: 60.0,
            return_speed: 2.0,
            zoom_speed: 2.0,
            min_zoom: 2.0,
            max_zoom: 10.0,
            zoom_smoothing: 5.0,
            smooth_speed: 10.0,
            collision_enabled: true,
            collision_radius: 0.3,
            collision_mask: LayerMask::ALL,
        }
    }
}

impl OrbitCameraConfig {
    /// Check the values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("camera.sensitivity_x", self.sensitivity_x),
            ("camera.sensitivity_y", self.sensitivity_y),
            ("camera.min_vertical_angle", self.min_vertical_angle),
            ("camera.max_vertical_angle", self.max_vertical_angle),
            ("camera.return_speed", self.return_speed),
            ("camera.zoom_speed", self.zoom_speed),
            ("camera.min_zoom", self.min_zoom),
            ("camera.max_zoom", self.max_zoom),
            ("camera.zoom_smoothing", self.zoom_smoothing),
            ("camera.smooth_speed", self.smooth_speed),
            ("camera.collision_radius", self.collision_radius),
        ] {
            ensure_finite(name, value)?;
        }
        ensure(self.offset.is_finite(), "camera.offset must be finite")?;

        ensure(
            self.offset.length_squared() > 1e-6,
            "camera.offset must not be zero (it defines the orbit direction)",
        )?;
        ensure(
            self.min_vertical_angle <= self.max_vertical_angle,
            "camera.min_vertical_angle must not exceed camera.max_vertical_angle",
        )?;
        ensure(
            self.min_zoom > 0.0 && self.min_zoom <= self.max_zoom,
            "camera zoom range must satisfy 0 < min_zoom <= max_zoom",
        )?;
        ensure(
            self.return_speed >= 0.0 && self.zoom_smoothing >= 0.0 && self.smooth_speed >= 0.0,
            "camera smoothing rates must not be negative",
        )?;
        ensure(self.collision_radius >= 0.0, "camera.collision_radius must not be negative")
    }

    /// Zoom distance implied by the initial offset, clamped to the zoom range.
    /// Inverted bounds are treated as the same range in the other order.
    pub fn initial_zoom(&self) -> f32 {
        clamp_range(self.offset.length(), self.min_zoom, self.max_zoom)
    }

    /// Unit direction of the initial offset (`-Z` when the offset is zero).
    pub fn reference_direction(&self) -> Vec3 {
        self.offset.try_normalize().unwrap_or(Vec3::NEG_Z)
    }

    /// Vertical angle used on reset and while relaxing, kept inside the range.
    pub fn default_vertical_angle(&self) -> f32 {
        clamp_range(DEFAULT_VERTICAL_ANGLE, self.min_vertical_angle, self.max_vertical_angle)
    }
}
