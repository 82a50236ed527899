//! Camera Module
//!
//! Third-person orbit camera. Window-system agnostic: it only computes the
//! camera pose and writes it into a host-owned [`CameraTransform`].

pub mod orbit;

pub use orbit::{
    CameraError, CameraTransform, DEFAULT_VERTICAL_ANGLE, FollowTarget, LookMode,
    OrbitCameraController, TargetPose,
};
