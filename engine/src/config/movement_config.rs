//! Movement Configuration
//!
//! Tuning for the character movement controller. `Default` returns the
//! values the rig ships with; every field can be overridden from JSON and
//! missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use super::{ConfigError, ensure, ensure_finite};
use crate::physics::LayerMask;

/// Walk speed in meters per second
pub const WALK_SPEED: f32 = 5.0;

/// Sprint speed in meters per second
pub const SPRINT_SPEED: f32 = 8.0;

/// Crouch speed in meters per second
pub const CROUCH_SPEED: f32 = 2.5;

/// Approach rate toward the desired horizontal velocity while input is held (1/s)
pub const ACCELERATION: f32 = 10.0;

/// Approach rate toward rest when input is released (1/s)
pub const DECELERATION: f32 = 10.0;

/// Gravity acceleration in meters per second squared (negative = down)
pub const GRAVITY: f32 = -15.0;

/// Peak jump height in meters
pub const JUMP_HEIGHT: f32 = 2.0;

/// Jumps available before touching the ground again
pub const MAX_JUMPS: u32 = 2;

/// Character controller height when standing, in meters
pub const STAND_HEIGHT: f32 = 2.0;

/// Character controller height when crouched, in meters
pub const CROUCH_HEIGHT: f32 = 1.0;

/// Approach rate of the controller height toward the stance height (1/s)
pub const CROUCH_TRANSITION_SPEED: f32 = 10.0;

/// Degrees of rotation per unit of mouse delta
pub const MOUSE_SENSITIVITY: f32 = 2.0;

/// Camera pitch limit in degrees (applied symmetrically)
pub const MAX_LOOK_ANGLE: f32 = 80.0;

/// Movement controller tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Walk speed (m/s)
    pub walk_speed: f32,
    /// Sprint speed (m/s), used while the sprint modifier is held and not crouching
    pub sprint_speed: f32,
    /// Crouch speed (m/s)
    pub crouch_speed: f32,
    /// Approach rate while moving (1/s)
    pub acceleration: f32,
    /// Approach rate while stopping (1/s)
    pub deceleration: f32,
    /// Gravity (m/s^2, negative)
    pub gravity: f32,
    /// Peak jump height (m)
    pub jump_height: f32,
    /// Jumps per airborne period (2 = double jump)
    pub max_jumps: u32,
    /// Distance below the body origin where the ground sphere is tested (m)
    pub ground_check_offset: f32,
    /// Radius of the ground sphere (m)
    pub ground_check_radius: f32,
    /// Layers counted as ground
    pub ground_mask: LayerMask,
    /// Controller height when standing (m)
    pub stand_height: f32,
    /// Controller height when crouched (m)
    pub crouch_height: f32,
    /// Height approach rate (1/s)
    pub crouch_transition_speed: f32,
    /// Degrees per unit of mouse delta
    pub mouse_sensitivity: f32,
    /// Pitch limit (degrees)
    pub max_look_angle: f32,
    /// Lock and hide the cursor on activation and when focus returns
    pub lock_cursor: bool,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            walk_speed: WALK_SPEED,
            sprint_speed: SPRINT_SPEED,
            crouch_speed: CROUCH_SPEED,
            acceleration: ACCELERATION,
            deceleration: DECELERATION,
            gravity: GRAVITY,
            jump_height: JUMP_HEIGHT,
            max_jumps: MAX_JUMPS,
            ground_check_offset: 0.1,
            ground_check_radius: 0.4,
            ground_mask: LayerMask::ALL,
            stand_height: STAND_HEIGHT,
            crouch_height: CROUCH_HEIGHT,
            crouch_transition_speed: CROUCH_TRANSITION_SPEED,
            mouse_sensitivity: MOUSE_SENSITIVITY,
            max_look_angle: MAX_LOOK_ANGLE,
            lock_cursor: true,
        }
    }
}

impl MovementConfig {
    /// Check the values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite("movement.walk_speed", self.walk_speed)?;
        ensure_finite("movement.sprint_speed", self.sprint_speed)?;
        ensure_finite("movement.crouch_speed", self.crouch_speed)?;
        ensure_finite("movement.acceleration", self.acceleration)?;
        ensure_finite("movement.deceleration", self.deceleration)?;
        ensure_finite("movement.gravity", self.gravity)?;
        ensure_finite("movement.jump_height", self.jump_height)?;
        ensure_finite("movement.ground_check_offset", self.ground_check_offset)?;
        ensure_finite("movement.ground_check_radius", self.ground_check_radius)?;
        ensure_finite("movement.stand_height", self.stand_height)?;
        ensure_finite("movement.crouch_height", self.crouch_height)?;
        ensure_finite("movement.crouch_transition_speed", self.crouch_transition_speed)?;
        ensure_finite("movement.mouse_sensitivity", self.mouse_sensitivity)?;
        ensure_finite("movement.max_look_angle", self.max_look_angle)?;

        ensure(
            self.walk_speed >= 0.0 && self.sprint_speed >= 0.0 && self.crouch_speed >= 0.0,
            "movement speeds must not be negative",
        )?;
        ensure(
            self.acceleration >= 0.0 && self.deceleration >= 0.0,
            "movement.acceleration and movement.deceleration must not be negative",
        )?;
        ensure(self.gravity < 0.0, "movement.gravity must be negative")?;
        ensure(self.jump_height >= 0.0, "movement.jump_height must not be negative")?;
        ensure(self.ground_check_radius > 0.0, "movement.ground_check_radius must be positive")?;
        ensure(
            self.crouch_height > 0.0 && self.crouch_height <= self.stand_height,
            "movement.crouch_height must be in (0, stand_height]",
        )?;
        ensure(
            self.crouch_transition_speed >= 0.0,
            "movement.crouch_transition_speed must not be negative",
        )?;
        ensure(
            (0.0..=90.0).contains(&self.max_look_angle),
            "movement.max_look_angle must be in [0, 90]",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = MovementConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_jumps, MAX_JUMPS);
        assert_eq!(config.gravity, GRAVITY);
    }

    #[test]
    fn test_rejects_positive_gravity() {
        let config = MovementConfig {
            gravity: 9.81,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_crouch_taller_than_stand() {
        let config = MovementConfig {
            crouch_height: 3.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_nan() {
        let config = MovementConfig {
            walk_speed: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: MovementConfig =
            serde_json::from_str(r#"{ "walk_speed": 3.0, "max_jumps": 1 }"#).unwrap();
        assert_eq!(config.walk_speed, 3.0);
        assert_eq!(config.max_jumps, 1);
        assert_eq!(config.sprint_speed, SPRINT_SPEED);
    }
}
