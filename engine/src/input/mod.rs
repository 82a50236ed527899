//! Input Module
//!
//! Per-frame input snapshots consumed by the controllers, edge detection for
//! hosts that only report button levels, and cursor lock tracking. Nothing
//! here talks to a windowing system.

pub mod cursor_manager;
pub mod frame_input;

pub use cursor_manager::{CursorAction, CursorManager, CursorState};
pub use frame_input::{ButtonEdge, LookAccumulator, MovementInput, OrbitInput};
