//! Physics query seams
//!
//! The controllers never own a physics world. They ask the host two
//! questions through these traits:
//!
//! - [`GroundProbe`]: does a sphere at a point overlap anything walkable?
//! - [`SphereCaster`]: how far can a sphere travel along a direction before
//!   touching something?
//!
//! Both queries are filtered by a [`LayerMask`].

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Bitmask of collision layers (32 layers, bit `n` = layer `n`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Matches every layer.
    pub const ALL: LayerMask = LayerMask(u32::MAX);
    /// Matches nothing.
    pub const NONE: LayerMask = LayerMask(0);

    /// Mask containing a single layer. Layers above 31 produce an empty mask.
    pub fn layer(layer: u32) -> Self {
        LayerMask(1u32.checked_shl(layer).unwrap_or(0))
    }

    /// Whether `layer` is part of this mask.
    pub fn contains(&self, layer: u32) -> bool {
        layer < 32 && self.0 & (1 << layer) != 0
    }

    /// Union of two masks.
    pub fn with(self, other: LayerMask) -> Self {
        LayerMask(self.0 | other.0)
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// Result of a successful sphere cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereCastHit {
    /// Distance the sphere center travelled before first contact
    pub distance: f32,
    /// Contact point on the obstacle
    pub point: Vec3,
    /// Surface normal at the contact
    pub normal: Vec3,
}

/// Sphere-overlap query used to decide whether a body stands on something.
pub trait GroundProbe {
    /// Returns `true` if a sphere at `point` with `radius` touches any
    /// collider on a layer in `mask`.
    fn check_sphere(&self, point: Vec3, radius: f32, mask: LayerMask) -> bool;
}

/// Swept-sphere query used for camera obstruction.
pub trait SphereCaster {
    /// Sweep a sphere from `origin` along the normalized `direction` for at
    /// most `max_distance`. Colliders the sphere already overlaps at `origin`
    /// are ignored.
    fn sphere_cast(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<SphereCastHit>;
}

impl<T: GroundProbe + ?Sized> GroundProbe for &T {
    fn check_sphere(&self, point: Vec3, radius: f32, mask: LayerMask) -> bool {
        (**self).check_sphere(point, radius, mask)
    }
}

impl<T: SphereCaster + ?Sized> SphereCaster for &T {
    fn sphere_cast(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<SphereCastHit> {
        (**self).sphere_cast(origin, radius, direction, max_distance, mask)
    }
}

/// Probe with a fixed answer, for hosts that track grounding themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedGround(pub bool);

impl GroundProbe for FixedGround {
    fn check_sphere(&self, _point: Vec3, _radius: f32, _mask: LayerMask) -> bool {
        self.0
    }
}

/// Caster that never hits anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenSky;

impl SphereCaster for OpenSky {
    fn sphere_cast(
        &self,
        _origin: Vec3,
        _radius: f32,
        _direction: Vec3,
        _max_distance: f32,
        _mask: LayerMask,
    ) -> Option<SphereCastHit> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_mask_membership() {
        let mask = LayerMask::layer(3).with(LayerMask::layer(5));
        assert!(mask.contains(3));
        assert!(mask.contains(5));
        assert!(!mask.contains(4));
        assert!(!mask.contains(40));
        assert_eq!(LayerMask::layer(32), LayerMask::NONE);
    }

    #[test]
    fn test_layer_mask_default_is_all() {
        let mask = LayerMask::default();
        assert!(mask.contains(0));
        assert!(mask.contains(31));
    }

    #[test]
    fn test_layer_mask_serde_transparent() {
        let json = serde_json::to_string(&LayerMask(6)).unwrap();
        assert_eq!(json, "6");
        let back: LayerMask = serde_json::from_str("6").unwrap();
        assert_eq!(back, LayerMask(6));
    }

    #[test]
    fn test_fixed_probes() {
        assert!(FixedGround(true).check_sphere(Vec3::ZERO, 0.4, LayerMask::ALL));
        assert!(!FixedGround(false).check_sphere(Vec3::ZERO, 0.4, LayerMask::ALL));
        assert!(
            OpenSky
                .sphere_cast(Vec3::ZERO, 0.3, Vec3::Z, 10.0, LayerMask::ALL)
                .is_none()
        );
    }
}
