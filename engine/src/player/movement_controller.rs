//! Player Movement Controller
//!
//! Third-person character movement driven once per frame by the host.
//! Movement direction follows the body's own facing; mouse look turns the
//! body and pitches the camera mount.
//!
//! # Frame Order
//!
//! 1. Ground probe (sphere just below the feet). Grounded and not rising:
//!    pin vertical velocity to [`GROUNDED_STICK_VELOCITY`] and refill jumps.
//! 2. Horizontal velocity approaches `direction * speed` at the acceleration
//!    rate (or the deceleration rate when there is no input).
//! 3. Gravity.
//! 4. Jump on the press edge while jumps remain.
//! 5. Crouch toggle and collider height transition.
//! 6. Mouse look (skipped when no camera mount is supplied).
//! 7. Displacement submitted to the body.
//!
//! # Physics Model (defaults)
//!
//! - Walk 5.0 m/s, sprint 8.0 m/s, crouch 2.5 m/s
//! - Gravity -15 m/s^2, jump height 2 m, two jumps per airborne period
//!
//! # Usage
//!
//! ```rust,ignore
//! use third_person_rig::player::{MovementController, SimpleBody, PitchPivot};
//! use third_person_rig::config::MovementConfig;
//!
//! let mut controller = MovementController::new(MovementConfig::default());
//! controller.activate();
//!
//! // Each frame:
//! let displacement = controller.update(dt, &input, &physics, &mut body, Some(&mut pivot));
//! ```

use glam::Vec3;

use crate::config::{ConfigError, MovementConfig};
use crate::debug::{self, GizmoSink};
use crate::input::{CursorManager, MovementInput};
use crate::math::{clamp_range, launch_velocity, smoothing_factor};
use crate::physics::GroundProbe;

use super::body::{CharacterBody, LookPivot};
use super::crouch::{CrouchController, Stance};

/// Vertical velocity held while grounded so the ground probe keeps touching.
pub const GROUNDED_STICK_VELOCITY: f32 = -2.0;

/// Desired speeds at or below this count as "no input" (deceleration rate).
pub const MOVE_INPUT_THRESHOLD: f32 = 0.01;

/// Longest frame the controller integrates in one step (seconds).
pub const MAX_FRAME_TIME: f32 = 0.1;

/// Character movement controller.
#[derive(Debug, Clone)]
pub struct MovementController {
    config: MovementConfig,

    /// Smoothed horizontal velocity (m/s, y always 0)
    horizontal_velocity: Vec3,

    /// Vertical velocity (m/s, positive = up)
    vertical_velocity: f32,

    /// Jumps left before the next landing
    jumps_remaining: u32,

    /// Result of the last ground probe
    grounded: bool,

    crouch: CrouchController,

    /// Camera pitch accumulator (degrees, positive = looking down)
    camera_pitch: f32,

    cursor: CursorManager,

    /// Where the last ground probe was taken (for debug drawing)
    last_probe_point: Option<Vec3>,
}

impl Default for MovementController {
    fn default() -> Self {
        Self::new(MovementConfig::default())
    }
}

impl MovementController {
    /// Create a controller. The config is used as given; see [`Self::try_new`].
    pub fn new(config: MovementConfig) -> Self {
        let crouch = CrouchController::new(
            config.stand_height,
            config.crouch_height,
            config.crouch_transition_speed,
        );
        Self {
            horizontal_velocity: Vec3::ZERO,
            vertical_velocity: 0.0,
            jumps_remaining: config.max_jumps,
            grounded: false,
            crouch,
            camera_pitch: 0.0,
            cursor: CursorManager::new_released(),
            last_probe_point: None,
            config,
        }
    }

    /// Create a controller after validating the config.
    pub fn try_new(config: MovementConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Component activation: lock the cursor for mouse look.
    pub fn activate(&mut self) {
        if self.config.lock_cursor {
            self.cursor.lock();
        }
        log::debug!("movement controller activated");
    }

    /// Window focus changed. Regaining focus re-applies the cursor lock.
    pub fn handle_focus_changed(&mut self, focused: bool) {
        if focused {
            self.cursor.handle_focus_gained();
            if self.config.lock_cursor {
                self.cursor.lock();
            }
        } else {
            self.cursor.handle_focus_lost();
        }
    }

    /// Cursor state for the host to apply.
    pub fn cursor(&self) -> &CursorManager {
        &self.cursor
    }

    /// Mutable cursor state (ESC / click handling, `take_pending`).
    pub fn cursor_mut(&mut self) -> &mut CursorManager {
        &mut self.cursor
    }

    /// Active configuration.
    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// Replace the configuration. Stance, collider height and velocities are
    /// kept; the height, jump count and pitch are brought inside the new limits.
    pub fn set_config(&mut self, config: MovementConfig) {
        self.crouch = CrouchController::new(
            config.stand_height,
            config.crouch_height,
            config.crouch_transition_speed,
        )
        .with_state(self.crouch.stance(), self.crouch.current_height());
        self.jumps_remaining = self.jumps_remaining.min(config.max_jumps);
        let limit = config.max_look_angle.abs();
        self.camera_pitch = clamp_range(self.camera_pitch, -limit, limit);
        self.config = config;
    }

    /// Full velocity (horizontal plus vertical).
    pub fn velocity(&self) -> Vec3 {
        self.horizontal_velocity + Vec3::Y * self.vertical_velocity
    }

    /// Smoothed horizontal velocity.
    pub fn horizontal_velocity(&self) -> Vec3 {
        self.horizontal_velocity
    }

    /// Horizontal speed in m/s.
    pub fn horizontal_speed(&self) -> f32 {
        self.horizontal_velocity.length()
    }

    /// Vertical velocity (positive = up).
    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    /// Set the vertical velocity directly (knockback, launch pads).
    pub fn set_vertical_velocity(&mut self, velocity: f32) {
        self.vertical_velocity = velocity;
    }

    /// Jumps left before the next landing.
    pub fn jumps_remaining(&self) -> u32 {
        self.jumps_remaining
    }

    /// Result of the last ground probe.
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Current stance.
    pub fn stance(&self) -> Stance {
        self.crouch.stance()
    }

    /// Whether the stance is `Crouching`.
    pub fn is_crouching(&self) -> bool {
        self.crouch.is_crouching()
    }

    /// Current collider height.
    pub fn current_height(&self) -> f32 {
        self.crouch.current_height()
    }

    /// Camera pitch accumulator in degrees.
    pub fn camera_pitch(&self) -> f32 {
        self.camera_pitch
    }

    /// Launch speed for one jump with the current config.
    pub fn jump_velocity(&self) -> f32 {
        launch_velocity(self.config.jump_height, self.config.gravity)
    }

    /// Speed the horizontal velocity is heading for given the sprint state.
    pub fn target_speed(&self, sprint_held: bool) -> f32 {
        if self.crouch.is_crouching() {
            self.config.crouch_speed
        } else if sprint_held {
            self.config.sprint_speed
        } else {
            self.config.walk_speed
        }
    }

    /// Ground probe center for a body at `position`.
    pub fn ground_probe_point(&self, position: Vec3) -> Vec3 {
        position - Vec3::Y * self.config.ground_check_offset
    }

    /// Stop, stand up, level the camera and refill jumps.
    pub fn reset(&mut self) {
        self.horizontal_velocity = Vec3::ZERO;
        self.vertical_velocity = 0.0;
        self.jumps_remaining = self.config.max_jumps;
        self.crouch.reset();
        self.camera_pitch = 0.0;
    }

    /// Run one frame.
    ///
    /// # Arguments
    /// * `dt` - Frame time in seconds (clamped to [`MAX_FRAME_TIME`])
    /// * `input` - This frame's input snapshot
    /// * `ground` - Ground overlap query
    /// * `body` - The character to steer
    /// * `pivot` - Camera mount; `None` skips the look step
    ///
    /// # Returns
    /// The displacement submitted to `body.move_by`.
    pub fn update<G, B>(
        &mut self,
        dt: f32,
        input: &MovementInput,
        ground: &G,
        body: &mut B,
        pivot: Option<&mut dyn LookPivot>,
    ) -> Vec3
    where
        G: GroundProbe + ?Sized,
        B: CharacterBody + ?Sized,
    {
        let dt = dt.clamp(0.0, MAX_FRAME_TIME);

        self.update_ground(ground, body.position());
        self.update_horizontal(dt, input, body.forward(), body.right());

        self.vertical_velocity += self.config.gravity * dt;

        if input.jump_pressed {
            self.try_jump();
        }

        if input.crouch_pressed {
            self.crouch.toggle();
        }
        let height = self.crouch.update(dt);
        body.set_collider(height, self.crouch.collider_center());

        if let Some(pivot) = pivot {
            self.apply_look(input, body, pivot);
        }

        let displacement = self.velocity() * dt;
        body.move_by(displacement);
        displacement
    }

    fn update_ground<G: GroundProbe + ?Sized>(&mut self, ground: &G, position: Vec3) {
        let probe = self.ground_probe_point(position);
        let was_grounded = self.grounded;
        self.grounded = ground.check_sphere(probe, self.config.ground_check_radius, self.config.ground_mask);
        self.last_probe_point = Some(probe);

        if self.grounded && !was_grounded {
            log::debug!("landed (vertical velocity {:.2})", self.vertical_velocity);
        }

        if self.grounded && self.vertical_velocity <= 0.0 {
            self.vertical_velocity = GROUNDED_STICK_VELOCITY;
            self.jumps_remaining = self.config.max_jumps;
        }
    }

    fn update_horizontal(&mut self, dt: f32, input: &MovementInput, forward: Vec3, right: Vec3) {
        let direction =
            (forward * input.move_axis.y + right * input.move_axis.x).normalize_or_zero();
        let desired = direction * self.target_speed(input.sprint_held);

        let rate = if desired.length() > MOVE_INPUT_THRESHOLD {
            self.config.acceleration
        } else {
            self.config.deceleration
        };
        self.horizontal_velocity = self
            .horizontal_velocity
            .lerp(desired, smoothing_factor(rate, dt));
    }

    fn try_jump(&mut self) -> bool {
        if self.jumps_remaining == 0 {
            return false;
        }
        self.vertical_velocity = self.jump_velocity();
        self.jumps_remaining -= 1;
        log::debug!(
            "jump ({} of {} left)",
            self.jumps_remaining,
            self.config.max_jumps
        );
        true
    }

    fn apply_look<B: CharacterBody + ?Sized>(
        &mut self,
        input: &MovementInput,
        body: &mut B,
        pivot: &mut dyn LookPivot,
    ) {
        let sensitivity = self.config.mouse_sensitivity;
        body.rotate_yaw(input.look_delta.x * sensitivity);

        let limit = self.config.max_look_angle.abs();
        let pitch = self.camera_pitch - input.look_delta.y * sensitivity;
        self.camera_pitch = clamp_range(pitch, -limit, limit);
        pivot.set_local_pitch(self.camera_pitch);
    }

    /// Draw the ground probe sphere (green when grounded).
    pub fn debug_draw(&self, gizmos: &mut dyn GizmoSink) {
        if let Some(point) = self.last_probe_point {
            let color = if self.grounded { debug::GREEN } else { debug::RED };
            gizmos.wire_sphere(point, self.config.ground_check_radius, color);
        }
    }
}
