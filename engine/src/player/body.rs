//! Host-side body seams
//!
//! The movement controller never owns the character. It reads and writes the
//! host's body through [`CharacterBody`] and drives the camera pitch through
//! [`LookPivot`]. [`SimpleBody`] and [`PitchPivot`] are plain in-memory
//! implementations for hosts without an engine.

use glam::{Quat, Vec3};

use crate::camera::FollowTarget;

/// The character the movement controller steers.
///
/// Axis convention: `+Y` up, `+Z` forward, `+X` right.
pub trait CharacterBody {
    /// World position of the body origin (at the feet).
    fn position(&self) -> Vec3;

    /// World rotation of the body.
    fn rotation(&self) -> Quat;

    /// Rotate about the up axis by `degrees`.
    fn rotate_yaw(&mut self, degrees: f32);

    /// Resize the collider. `center` is relative to the body origin.
    fn set_collider(&mut self, height: f32, center: Vec3);

    /// Move by `displacement`, letting the host resolve collisions.
    fn move_by(&mut self, displacement: Vec3);

    /// Body forward axis in world space.
    fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::Z
    }

    /// Body right axis in world space.
    fn right(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }
}

/// The camera mount whose local pitch follows the look accumulator.
pub trait LookPivot {
    /// Set the pivot's local rotation to a pure pitch of `degrees`.
    fn set_local_pitch(&mut self, degrees: f32);
}

/// In-memory character body.
///
/// `move_by` only applies an optional floor: the body is kept at or above
/// `floor` and otherwise moves freely.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleBody {
    pub position: Vec3,
    pub rotation: Quat,
    pub collider_height: f32,
    pub collider_center: Vec3,
    pub floor: Option<f32>,
}

impl Default for SimpleBody {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            collider_height: 2.0,
            collider_center: Vec3::new(0.0, 1.0, 0.0),
            floor: None,
        }
    }
}

impl SimpleBody {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Body that cannot sink below `floor`.
    pub fn on_floor(position: Vec3, floor: f32) -> Self {
        Self {
            position,
            floor: Some(floor),
            ..Default::default()
        }
    }

    /// Yaw in degrees, `0` facing `+Z`, positive turning toward `+X`.
    pub fn yaw_degrees(&self) -> f32 {
        let forward = self.rotation * Vec3::Z;
        forward.x.atan2(forward.z).to_degrees()
    }
}

impl CharacterBody for SimpleBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn rotate_yaw(&mut self, degrees: f32) {
        self.rotation = (self.rotation * Quat::from_rotation_y(degrees.to_radians())).normalize();
    }

    fn set_collider(&mut self, height: f32, center: Vec3) {
        self.collider_height = height;
        self.collider_center = center;
    }

    fn move_by(&mut self, displacement: Vec3) {
        self.position += displacement;
        if let Some(floor) = self.floor {
            self.position.y = self.position.y.max(floor);
        }
    }
}

impl FollowTarget for SimpleBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn yaw_degrees(&self) -> f32 {
        SimpleBody::yaw_degrees(self)
    }
}

/// In-memory camera mount.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PitchPivot {
    pub pitch_degrees: f32,
}

impl PitchPivot {
    /// Local rotation of the mount.
    pub fn local_rotation(&self) -> Quat {
        Quat::from_rotation_x(self.pitch_degrees.to_radians())
    }
}

impl LookPivot for PitchPivot {
    fn set_local_pitch(&mut self, degrees: f32) {
        self.pitch_degrees = degrees;
    }
}
