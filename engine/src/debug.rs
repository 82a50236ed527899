//! Debug visualization hook
//!
//! Controllers can describe their probes as simple shapes through a
//! [`GizmoSink`]. Drawing is never part of a frame update; the host calls
//! `debug_draw` separately when it wants diagnostics.

use glam::{Vec3, Vec4};

/// RGBA color, components in `[0, 1]`.
pub type Color = Vec4;

pub const GREEN: Color = Vec4::new(0.0, 1.0, 0.0, 1.0);
pub const RED: Color = Vec4::new(1.0, 0.0, 0.0, 1.0);
pub const YELLOW: Color = Vec4::new(1.0, 0.92, 0.016, 1.0);
pub const CYAN: Color = Vec4::new(0.0, 1.0, 1.0, 1.0);

/// Receiver of debug shapes (an engine gizmo API, a line renderer, a log).
pub trait GizmoSink {
    /// Wireframe sphere.
    fn wire_sphere(&mut self, center: Vec3, radius: f32, color: Color);
    /// Line segment.
    fn line(&mut self, from: Vec3, to: Vec3, color: Color);
}

/// One recorded debug shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gizmo {
    WireSphere { center: Vec3, radius: f32, color: Color },
    Line { from: Vec3, to: Vec3, color: Color },
}

/// Sink that stores every shape, for tests and offline inspection.
#[derive(Debug, Clone, Default)]
pub struct GizmoRecorder {
    pub gizmos: Vec<Gizmo>,
}

impl GizmoRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded spheres as `(center, radius, color)`.
    pub fn spheres(&self) -> impl Iterator<Item = (Vec3, f32, Color)> + '_ {
        self.gizmos.iter().filter_map(|g| match *g {
            Gizmo::WireSphere { center, radius, color } => Some((center, radius, color)),
            Gizmo::Line { .. } => None,
        })
    }

    /// Recorded lines as `(from, to, color)`.
    pub fn lines(&self) -> impl Iterator<Item = (Vec3, Vec3, Color)> + '_ {
        self.gizmos.iter().filter_map(|g| match *g {
            Gizmo::Line { from, to, color } => Some((from, to, color)),
            Gizmo::WireSphere { .. } => None,
        })
    }

    pub fn clear(&mut self) {
        self.gizmos.clear();
    }
}

impl GizmoSink for GizmoRecorder {
    fn wire_sphere(&mut self, center: Vec3, radius: f32, color: Color) {
        self.gizmos.push(Gizmo::WireSphere { center, radius, color });
    }

    fn line(&mut self, from: Vec3, to: Vec3, color: Color) {
        self.gizmos.push(Gizmo::Line { from, to, color });
    }
}
