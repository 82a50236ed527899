//! Third-Person Rig Library
//!
//! A third-person character movement controller and an orbit follow camera,
//! driven once per frame by a host loop. The rig owns no engine objects: it
//! reads input snapshots, asks the host's physics two questions per frame and
//! writes results back through small traits.
//!
//! # Modules
//!
//! - [`player`] - Movement controller, crouch stance, body seams
//! - [`camera`] - Orbit camera with free-look, zoom and collision pull-in
//! - [`input`] - Per-frame input snapshots and cursor lock tracking
//! - [`physics`] - Ground probe / sphere cast traits and a static reference scene
//! - [`config`] - Serializable tuning for both controllers
//! - [`debug`] - Optional gizmo drawing hook
//!
//! # Example
//!
//! ```ignore
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use third_person_rig::camera::{CameraTransform, OrbitCameraController};
//! use third_person_rig::config::RigConfig;
//! use third_person_rig::input::{MovementInput, OrbitInput};
//! use third_person_rig::physics::StaticScene;
//! use third_person_rig::player::{MovementController, PitchPivot, SimpleBody};
//!
//! let config = RigConfig::default();
//! let scene = StaticScene::with_ground(0.0);
//! let body = Rc::new(RefCell::new(SimpleBody::default()));
//! let mut pivot = PitchPivot::default();
//!
//! let mut movement = MovementController::new(config.movement);
//! let mut orbit = OrbitCameraController::new(config.camera).with_target(Rc::clone(&body));
//! let mut camera = CameraTransform::default();
//! movement.activate();
//!
//! // Each frame:
//! movement.update(dt, &MovementInput::default(), &scene, &mut *body.borrow_mut(), Some(&mut pivot));
//! orbit.late_update(dt, &OrbitInput::default(), &scene, &mut camera)?;
//! ```

pub mod camera;
pub mod config;
pub mod debug;
pub mod input;
pub mod math;
pub mod physics;
pub mod player;

// Re-export the main types for convenience
pub use camera::{CameraError, CameraTransform, FollowTarget, OrbitCameraController};
pub use config::{ConfigError, RigConfig};
pub use input::{MovementInput, OrbitInput};
pub use physics::{GroundProbe, LayerMask, SphereCaster, StaticScene};
pub use player::{CharacterBody, LookPivot, MovementController};
