//! Per-frame input snapshots
//!
//! The host polls its own input system once per frame and fills one of these
//! structs. Buttons that act on a press are delivered as edges (`*_pressed`
//! is `true` only on the frame the button went down); [`ButtonEdge`] turns a
//! held/not-held signal into those edges for hosts that only expose levels.
//!
//! # Example
//!
//! ```rust,ignore
//! use third_person_rig::input::{ButtonEdge, MovementInput};
//! use glam::Vec2;
//!
//! let mut jump = ButtonEdge::new();
//!
//! // Each frame:
//! jump.update(space_is_down);
//! let input = MovementInput {
//!     move_axis: Vec2::new(right - left, forward - back),
//!     jump_pressed: jump.just_pressed(),
//!     ..Default::default()
//! };
//! ```

use glam::Vec2;

/// Input consumed by the movement controller for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementInput {
    /// Directional axes: `x` = horizontal (strafe), `y` = vertical (forward).
    /// Each component is expected in `[-1, 1]`.
    pub move_axis: Vec2,
    /// Sprint modifier is held
    pub sprint_held: bool,
    /// Jump button went down this frame
    pub jump_pressed: bool,
    /// Crouch toggle went down this frame
    pub crouch_pressed: bool,
    /// Raw mouse delta for this frame
    pub look_delta: Vec2,
}

/// Input consumed by the orbit camera for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrbitInput {
    /// Primary (free-look) button went down this frame
    pub look_pressed: bool,
    /// Primary (free-look) button went up this frame
    pub look_released: bool,
    /// Raw mouse delta for this frame
    pub look_delta: Vec2,
    /// Scroll wheel delta for this frame (positive = away from the user)
    pub scroll_delta: f32,
}

/// Edge detector for a single button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonEdge {
    held: bool,
    was_held: bool,
}

impl ButtonEdge {
    /// Create a tracker with the button released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current held state. Call exactly once per frame.
    pub fn update(&mut self, held: bool) {
        self.was_held = self.held;
        self.held = held;
    }

    /// Button is down this frame.
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Button went down this frame.
    pub fn just_pressed(&self) -> bool {
        self.held && !self.was_held
    }

    /// Button went up this frame.
    pub fn just_released(&self) -> bool {
        !self.held && self.was_held
    }

    /// Forget all history (e.g. after focus loss).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Accumulates raw mouse motion between frames.
///
/// Motion events can arrive several times per frame; the controllers want one
/// delta per update.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LookAccumulator {
    delta: Vec2,
}

impl LookAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add raw motion from one event.
    #[inline]
    pub fn accumulate(&mut self, dx: f32, dy: f32) {
        self.delta += Vec2::new(dx, dy);
    }

    /// Return the accumulated motion and reset to zero.
    #[inline]
    pub fn consume(&mut self) -> Vec2 {
        std::mem::take(&mut self.delta)
    }
}
