//! Orbit Camera Controller
//!
//! Third-person camera that follows a target from behind, orbits it while the
//! free-look button is held and relaxes back behind it on release.
//!
//! # Frame Order (`late_update`)
//!
//! 1. Free-look toggles on the primary button press/release edges.
//! 2. Free-looking: mouse delta moves the horizontal offset and the vertical
//!    angle (clamped).
//! 3. Following: offset relaxes to 0 and the vertical angle to
//!    [`DEFAULT_VERTICAL_ANGLE`]; the yaw baseline tracks the target live.
//! 4. Scroll moves the target zoom; the zoom distance approaches it.
//! 5. Desired position = target + rotated reference direction * zoom.
//! 6. Sphere cast from the target pulls the camera in front of obstacles,
//!    never closer than `min_zoom`.
//! 7. Position and rotation approach the desired pose at `smooth_speed`.
//!
//! Angles are degrees. The reference direction is the normalized initial
//! offset, so with the default `(0, 2, -5)` the camera sits behind and above
//! a target facing `+Z`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use third_person_rig::camera::{CameraTransform, OrbitCameraController};
//!
//! let mut orbit = OrbitCameraController::new(config.camera).with_target(player.clone());
//! let mut camera = CameraTransform::default();
//!
//! // After the character update each frame:
//! if let Err(e) = orbit.late_update(dt, &orbit_input, &physics, &mut camera) {
//!     // No target yet; camera left untouched
//! }
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use glam::{EulerRot, Quat, Vec3};

use crate::config::{ConfigError, OrbitCameraConfig};
use crate::debug::{self, GizmoSink};
use crate::input::OrbitInput;
use crate::math::{clamp_range, lerp, look_rotation, smoothing_factor};
use crate::physics::SphereCaster;

pub use crate::config::DEFAULT_VERTICAL_ANGLE;

/// Radius of the zoom range markers drawn by `debug_draw` (m)
const ZOOM_MARKER_RADIUS: f32 = 0.1;

/// Something the camera can follow.
pub trait FollowTarget {
    /// World position the camera orbits and looks at.
    fn position(&self) -> Vec3;

    /// Facing in degrees about `+Y` (`0` = facing `+Z`, positive toward `+X`).
    fn yaw_degrees(&self) -> f32;
}

impl<T: FollowTarget + ?Sized> FollowTarget for &T {
    fn position(&self) -> Vec3 {
        (**self).position()
    }

    fn yaw_degrees(&self) -> f32 {
        (**self).yaw_degrees()
    }
}

/// Shared target, e.g. a body the movement controller also steers.
impl<T: FollowTarget + ?Sized> FollowTarget for Rc<RefCell<T>> {
    fn position(&self) -> Vec3 {
        self.borrow().position()
    }

    fn yaw_degrees(&self) -> f32 {
        self.borrow().yaw_degrees()
    }
}

/// A fixed target pose.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TargetPose {
    pub position: Vec3,
    pub yaw_degrees: f32,
}

impl TargetPose {
    pub fn new(position: Vec3, yaw_degrees: f32) -> Self {
        Self {
            position,
            yaw_degrees,
        }
    }
}

impl FollowTarget for TargetPose {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn yaw_degrees(&self) -> f32 {
        self.yaw_degrees
    }
}

/// World pose of the camera, owned by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for CameraTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl CameraTransform {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Viewing direction (`+Z` of the rotation).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

/// Whether the camera follows the target's facing or orbits freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookMode {
    /// Behind the target, relaxing toward the default angles
    #[default]
    Following,
    /// Orbiting under mouse control while the primary button is held
    FreeLooking,
}

/// Errors reported by the orbit camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraError {
    /// `late_update` ran with no target assigned. The frame was skipped.
    MissingTarget,
}

impl std::fmt::Display for CameraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CameraError::MissingTarget => write!(f, "orbit camera has no target assigned"),
        }
    }
}

impl std::error::Error for CameraError {}

/// Orbit camera controller.
#[derive(Debug, Clone)]
pub struct OrbitCameraController<T> {
    config: OrbitCameraConfig,
    target: Option<T>,

    /// Target yaw baseline (degrees)
    target_yaw: f32,
    /// Orbit offset from the target yaw (degrees)
    horizontal_offset: f32,
    /// Elevation of the orbit (degrees)
    vertical_angle: f32,
    current_zoom: f32,
    target_zoom: f32,
    mode: LookMode,

    /// Normalized initial offset
    reference_direction: Vec3,

    /// Camera-to-target distance chosen last frame (after collision)
    resolved_distance: f32,
    /// Last sphere cast hit something
    obstructed: bool,

    /// Missing-target warning already logged for the current streak
    missing_target_reported: bool,
}

impl<T: FollowTarget> OrbitCameraController<T> {
    /// Create a controller with no target. The config is used as given.
    pub fn new(config: OrbitCameraConfig) -> Self {
        let zoom = config.initial_zoom();
        Self {
            target: None,
            target_yaw: 0.0,
            horizontal_offset: 0.0,
            vertical_angle: config.default_vertical_angle(),
            current_zoom: zoom,
            target_zoom: zoom,
            mode: LookMode::Following,
            reference_direction: config.reference_direction(),
            resolved_distance: zoom,
            obstructed: false,
            missing_target_reported: false,
            config,
        }
    }

    /// Create a controller after validating the config.
    pub fn try_new(config: OrbitCameraConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Builder form of [`Self::set_target`].
    pub fn with_target(mut self, target: T) -> Self {
        self.set_target(target);
        self
    }

    /// Follow a new target, taking its current yaw as the baseline.
    pub fn set_target(&mut self, target: T) {
        self.target_yaw = target.yaw_degrees();
        self.target = Some(target);
        self.missing_target_reported = false;
    }

    /// Stop following. Returns the previous target.
    pub fn clear_target(&mut self) -> Option<T> {
        self.target.take()
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    pub fn target_mut(&mut self) -> Option<&mut T> {
        self.target.as_mut()
    }

    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    /// Back behind the target at the default angle and zoom.
    pub fn reset(&mut self) {
        let zoom = self.config.initial_zoom();
        self.horizontal_offset = 0.0;
        self.vertical_angle = self.config.default_vertical_angle();
        self.current_zoom = zoom;
        self.target_zoom = zoom;
        self.mode = LookMode::Following;
    }

    pub fn config(&self) -> &OrbitCameraConfig {
        &self.config
    }

    pub fn mode(&self) -> LookMode {
        self.mode
    }

    pub fn is_free_looking(&self) -> bool {
        self.mode == LookMode::FreeLooking
    }

    pub fn target_yaw(&self) -> f32 {
        self.target_yaw
    }

    pub fn horizontal_offset(&self) -> f32 {
        self.horizontal_offset
    }

    pub fn vertical_angle(&self) -> f32 {
        self.vertical_angle
    }

    pub fn current_zoom(&self) -> f32 {
        self.current_zoom
    }

    pub fn target_zoom(&self) -> f32 {
        self.target_zoom
    }

    /// Normalized initial offset the orbit rotates.
    pub fn reference_direction(&self) -> Vec3 {
        self.reference_direction
    }

    /// Distance used last frame after collision correction.
    pub fn resolved_distance(&self) -> f32 {
        self.resolved_distance
    }

    /// Whether the last frame's sphere cast was blocked.
    pub fn is_obstructed(&self) -> bool {
        self.obstructed
    }

    /// Orbit rotation for the current angles.
    pub fn orbit_rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            (self.target_yaw + self.horizontal_offset).to_radians(),
            self.vertical_angle.to_radians(),
            0.0,
        )
    }

    /// Unit direction from the target toward the camera.
    pub fn view_direction(&self) -> Vec3 {
        self.orbit_rotation() * self.reference_direction
    }

    /// Run one late-frame tick.
    ///
    /// # Errors
    /// [`CameraError::MissingTarget`] when no target is assigned; `camera` is
    /// not touched. The error is returned on every skipped frame, but the
    /// warning is logged only on the first frame of each missing-target
    /// streak (assigning a target re-arms it).
    pub fn late_update<C: SphereCaster + ?Sized>(
        &mut self,
        dt: f32,
        input: &OrbitInput,
        physics: &C,
        camera: &mut CameraTransform,
    ) -> Result<(), CameraError> {
        let (target_position, live_yaw) = match &self.target {
            Some(target) => (target.position(), target.yaw_degrees()),
            None => return Err(self.report_missing_target()),
        };

        self.update_mode(input);
        self.update_angles(dt, input, live_yaw);
        self.update_zoom(dt, input.scroll_delta);

        let direction = self.view_direction();
        let distance = self.resolve_distance(physics, target_position, direction);
        let desired_position = target_position + direction * distance;

        let t = smoothing_factor(self.config.smooth_speed, dt);
        camera.position = camera.position.lerp(desired_position, t);
        if let Some(look) = look_rotation(target_position - camera.position, Vec3::Y) {
            camera.rotation = camera.rotation.slerp(look, t).normalize();
        }

        Ok(())
    }

    fn report_missing_target(&mut self) -> CameraError {
        if !self.missing_target_reported {
            log::warn!("orbit camera has no target assigned; skipping update");
            self.missing_target_reported = true;
        }
        CameraError::MissingTarget
    }

    fn update_mode(&mut self, input: &OrbitInput) {
        if input.look_pressed && self.mode == LookMode::Following {
            self.mode = LookMode::FreeLooking;
            log::debug!("free-look started");
        }
        if input.look_released && self.mode == LookMode::FreeLooking {
            self.mode = LookMode::Following;
            log::debug!("free-look ended");
        }
    }

    fn update_angles(&mut self, dt: f32, input: &OrbitInput, live_yaw: f32) {
        let (min, max) = (self.config.min_vertical_angle, self.config.max_vertical_angle);
        match self.mode {
            LookMode::FreeLooking => {
                self.horizontal_offset += input.look_delta.x * self.config.sensitivity_x;
                self.vertical_angle -= input.look_delta.y * self.config.sensitivity_y;
            }
            LookMode::Following => {
                let t = smoothing_factor(self.config.return_speed, dt);
                self.horizontal_offset = lerp(self.horizontal_offset, 0.0, t);
                self.vertical_angle =
                    lerp(self.vertical_angle, self.config.default_vertical_angle(), t);
                self.target_yaw = live_yaw;
            }
        }
        self.vertical_angle = clamp_range(self.vertical_angle, min, max);
    }

    fn update_zoom(&mut self, dt: f32, scroll: f32) {
        let (min, max) = (self.config.min_zoom, self.config.max_zoom);
        if scroll != 0.0 {
            self.target_zoom =
                clamp_range(self.target_zoom - scroll * self.config.zoom_speed, min, max);
        }
        let t = smoothing_factor(self.config.zoom_smoothing, dt);
        self.current_zoom = clamp_range(lerp(self.current_zoom, self.target_zoom, t), min, max);
    }

    fn resolve_distance<C: SphereCaster + ?Sized>(
        &mut self,
        physics: &C,
        origin: Vec3,
        direction: Vec3,
    ) -> f32 {
        self.obstructed = false;
        self.resolved_distance = self.current_zoom;
        if !self.config.collision_enabled {
            return self.resolved_distance;
        }

        let radius = self.config.collision_radius;
        if let Some(hit) = physics.sphere_cast(
            origin,
            radius,
            direction,
            self.current_zoom,
            self.config.collision_mask,
        ) {
            self.obstructed = true;
            self.resolved_distance = (hit.distance - radius).max(self.config.min_zoom);
            log::debug!(
                "camera obstructed at {:.2}m, pulled in to {:.2}m",
                hit.distance,
                self.resolved_distance
            );
        }
        self.resolved_distance
    }

    /// Draw the target line, the collision sphere and the zoom range markers.
    pub fn debug_draw(&self, camera: &CameraTransform, gizmos: &mut dyn GizmoSink) {
        let Some(target) = &self.target else {
            return;
        };
        let target_position = target.position();

        gizmos.line(target_position, camera.position, debug::YELLOW);
        let sphere_color = if self.obstructed { debug::RED } else { debug::CYAN };
        gizmos.wire_sphere(camera.position, self.config.collision_radius, sphere_color);

        let direction = self.view_direction();
        gizmos.wire_sphere(
            target_position + direction * self.config.min_zoom,
            ZOOM_MARKER_RADIUS,
            debug::GREEN,
        );
        gizmos.wire_sphere(
            target_position + direction * self.config.max_zoom,
            ZOOM_MARKER_RADIUS,
            debug::RED,
        );
    }
}
