//! Player Crouch System
//!
//! Toggle-based stance with a smoothly approaching collider height.
//!
//! # Height Transitions
//!
//! Each frame the height moves a fraction `transition_speed * dt` of the
//! remaining distance toward the stance height. The collider center is kept at
//! half the height so the feet stay on the ground while the head moves.
//!
//! # Usage
//!
//! ```rust,ignore
//! use third_person_rig::player::CrouchController;
//!
//! let mut crouch = CrouchController::new(2.0, 1.0, 10.0);
//!
//! // Each frame:
//! if input.crouch_pressed {
//!     crouch.toggle();
//! }
//! let height = crouch.update(delta_time);
//! body.set_collider(height, crouch.collider_center());
//! ```

use glam::Vec3;

use crate::math::{clamp_range, lerp, smoothing_factor};

/// Player stance states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stance {
    /// Upright at full height
    #[default]
    Standing,
    /// Crouched at reduced height and speed
    Crouching,
}

impl Stance {
    /// The other stance.
    pub fn toggled(self) -> Self {
        match self {
            Stance::Standing => Stance::Crouching,
            Stance::Crouching => Stance::Standing,
        }
    }
}

/// Stance plus interpolated collider height.
#[derive(Debug, Clone)]
pub struct CrouchController {
    stance: Stance,
    current_height: f32,
    stand_height: f32,
    crouch_height: f32,
    transition_speed: f32,
}

impl CrouchController {
    /// Standing controller at full height.
    pub fn new(stand_height: f32, crouch_height: f32, transition_speed: f32) -> Self {
        Self {
            stance: Stance::Standing,
            current_height: stand_height,
            stand_height,
            crouch_height,
            transition_speed,
        }
    }

    /// Start from an existing stance and height, e.g. when the heights are
    /// reconfigured mid-transition. The height is kept inside the new
    /// stand/crouch range.
    pub fn with_state(mut self, stance: Stance, height: f32) -> Self {
        self.stance = stance;
        self.current_height = clamp_range(height, self.crouch_height, self.stand_height);
        self
    }

    /// Get the current stance.
    pub fn stance(&self) -> Stance {
        self.stance
    }

    /// Whether the stance is `Crouching`.
    pub fn is_crouching(&self) -> bool {
        self.stance == Stance::Crouching
    }

    /// Current collider height (may be between stance heights).
    pub fn current_height(&self) -> f32 {
        self.current_height
    }

    /// Height the current stance is approaching.
    pub fn target_height(&self) -> f32 {
        match self.stance {
            Stance::Standing => self.stand_height,
            Stance::Crouching => self.crouch_height,
        }
    }

    /// Collider center relative to the body origin.
    pub fn collider_center(&self) -> Vec3 {
        Vec3::new(0.0, self.current_height * 0.5, 0.0)
    }

    /// Flip between standing and crouching.
    pub fn toggle(&mut self) {
        self.stance = self.stance.toggled();
        log::debug!("stance -> {:?}", self.stance);
    }

    /// Advance the height transition and return the new height.
    pub fn update(&mut self, dt: f32) -> f32 {
        let t = smoothing_factor(self.transition_speed, dt);
        self.current_height = lerp(self.current_height, self.target_height(), t);
        self.current_height
    }

    /// Stand up immediately at full height.
    pub fn reset(&mut self) {
        self.stance = Stance::Standing;
        self.current_height = self.stand_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn controller() -> CrouchController {
        CrouchController::new(2.0, 1.0, 10.0)
    }

    #[test]
    fn test_default_standing() {
        let crouch = controller();
        assert_eq!(crouch.stance(), Stance::Standing);
        assert!(approx_eq(crouch.current_height(), 2.0));
        assert!(approx_eq(crouch.collider_center().y, 1.0));
    }

    #[test]
    fn test_toggle_flips_stance() {
        let mut crouch = controller();
        crouch.toggle();
        assert!(crouch.is_crouching());
        crouch.toggle();
        assert_eq!(crouch.stance(), Stance::Standing);
    }

    #[test]
    fn test_height_moves_partway_each_frame() {
        let mut crouch = controller();
        crouch.toggle();

        // 10/s * 0.05s = half the remaining distance
        let h = crouch.update(0.05);
        assert!(approx_eq(h, 1.5));
        assert!(approx_eq(crouch.collider_center().y, 0.75));
    }

    #[test]
    fn test_height_converges() {
        let mut crouch = controller();
        crouch.toggle();
        for _ in 0..200 {
            crouch.update(0.016);
        }
        assert!(approx_eq(crouch.current_height(), 1.0));
    }

    #[test]
    fn test_long_frame_snaps_without_overshoot() {
        let mut crouch = controller();
        crouch.toggle();
        assert!(approx_eq(crouch.update(1.0), 1.0));
    }

    #[test]
    fn test_with_state_keeps_height_in_range() {
        let crouch = controller().with_state(Stance::Crouching, 1.4);
        assert!(crouch.is_crouching());
        assert!(approx_eq(crouch.current_height(), 1.4));

        let crouch = CrouchController::new(1.8, 1.2, 10.0).with_state(Stance::Crouching, 1.0);
        assert!(approx_eq(crouch.current_height(), 1.2));
    }

    #[test]
    fn test_reset() {
        let mut crouch = controller();
        crouch.toggle();
        crouch.update(0.05);
        crouch.reset();
        assert_eq!(crouch.stance(), Stance::Standing);
        assert!(approx_eq(crouch.current_height(), 2.0));
    }
}
