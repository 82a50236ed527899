//! Physics module
//!
//! The rig does not simulate physics. It issues two queries per frame (a
//! ground overlap and a camera sphere cast) through the traits in [`probe`],
//! and the host answers them from whatever physics world it owns.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**, velocities in m/s, accelerations in m/s².
//!
//! # Submodules
//!
//! - [`probe`] - Query traits, layer masks and trivial probe implementations
//! - [`collision`] - `StaticScene`, a ground plane plus boxes answering both queries

pub mod collision;
pub mod probe;

pub use collision::{GroundPlane, SceneBox, StaticScene, DEFAULT_LAYER};
pub use probe::{FixedGround, GroundProbe, LayerMask, OpenSky, SphereCastHit, SphereCaster};
