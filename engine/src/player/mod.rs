//! Player Module
//!
//! Character movement and the seams it drives.
//!
//! # Components
//!
//! - [`MovementController`] - Facing-relative movement, gravity, multi-jump and mouse look
//! - [`CrouchController`] - Stance toggle with smooth collider height transitions
//! - [`CharacterBody`] / [`LookPivot`] - What the host provides to be steered
//! - [`SimpleBody`] / [`PitchPivot`] - In-memory implementations of those seams

pub mod body;
pub mod crouch;
pub mod movement_controller;

pub use body::{CharacterBody, LookPivot, PitchPivot, SimpleBody};
pub use crouch::{CrouchController, Stance};
pub use movement_controller::{
    GROUNDED_STICK_VELOCITY, MAX_FRAME_TIME, MOVE_INPUT_THRESHOLD, MovementController,
};
