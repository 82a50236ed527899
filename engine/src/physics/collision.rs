//! Static collision scene
//!
//! A minimal world made of one horizontal ground plane and a set of
//! axis-aligned boxes. It implements both [`GroundProbe`] and
//! [`SphereCaster`] so hosts without a physics engine (tests, the demo
//! binary) can drive the controllers.
//!
//! # Sphere casts
//!
//! A sphere sweep against a box is approximated by a ray cast against the box
//! grown by the sphere radius on every side (Minkowski sum without rounded
//! edges). The slab method finds the ray entry distance.
//!
//! # Example
//!
//! ```ignore
//! use third_person_rig::physics::{StaticScene, SceneBox, SphereCaster, LayerMask};
//! use glam::Vec3;
//!
//! let scene = StaticScene::with_ground(0.0)
//!     .with_box(SceneBox::new(Vec3::new(-1.0, 0.0, 4.0), Vec3::new(1.0, 3.0, 5.0)));
//!
//! if let Some(hit) = scene.sphere_cast(Vec3::Y, 0.3, Vec3::Z, 10.0, LayerMask::ALL) {
//!     println!("Blocked after {} m", hit.distance);
//! }
//! ```

use glam::Vec3;

use super::probe::{GroundProbe, LayerMask, SphereCastHit, SphereCaster};

/// Layer used by the ground plane and by boxes created with [`SceneBox::new`].
pub const DEFAULT_LAYER: u32 = 0;

/// Axis-aligned box obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneBox {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
    /// Collision layer (0..31)
    pub layer: u32,
}

impl SceneBox {
    /// Box on [`DEFAULT_LAYER`]. Corners may be given in any order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
            layer: DEFAULT_LAYER,
        }
    }

    /// Same box on another layer.
    pub fn on_layer(mut self, layer: u32) -> Self {
        self.layer = layer;
        self
    }

    /// Closest point of the box to `point`.
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }

    fn expanded(&self, amount: f32) -> (Vec3, Vec3) {
        (self.min - Vec3::splat(amount), self.max + Vec3::splat(amount))
    }
}

/// Horizontal ground plane at a fixed height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundPlane {
    /// World Y of the surface
    pub height: f32,
    /// Collision layer (0..31)
    pub layer: u32,
}

/// Ground plane plus box obstacles.
#[derive(Debug, Clone, Default)]
pub struct StaticScene {
    ground: Option<GroundPlane>,
    boxes: Vec<SceneBox>,
}

impl StaticScene {
    /// Empty scene: every probe misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scene with a ground plane at `height` on [`DEFAULT_LAYER`].
    pub fn with_ground(height: f32) -> Self {
        Self {
            ground: Some(GroundPlane {
                height,
                layer: DEFAULT_LAYER,
            }),
            boxes: Vec::new(),
        }
    }

    /// Builder-style box insertion.
    pub fn with_box(mut self, obstacle: SceneBox) -> Self {
        self.boxes.push(obstacle);
        self
    }

    /// Add a box obstacle.
    pub fn add_box(&mut self, obstacle: SceneBox) {
        self.boxes.push(obstacle);
    }

    /// Replace (or remove) the ground plane.
    pub fn set_ground(&mut self, ground: Option<GroundPlane>) {
        self.ground = ground;
    }

    /// Ground plane, if any.
    pub fn ground(&self) -> Option<GroundPlane> {
        self.ground
    }

    /// All box obstacles.
    pub fn boxes(&self) -> &[SceneBox] {
        &self.boxes
    }
}

impl GroundProbe for StaticScene {
    fn check_sphere(&self, point: Vec3, radius: f32, mask: LayerMask) -> bool {
        if let Some(ground) = self.ground {
            if mask.contains(ground.layer) && point.y - radius <= ground.height {
                return true;
            }
        }

        self.boxes.iter().any(|b| {
            mask.contains(b.layer) && b.closest_point(point).distance_squared(point) <= radius * radius
        })
    }
}

impl SphereCaster for StaticScene {
    fn sphere_cast(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<SphereCastHit> {
        let direction = direction.try_normalize()?;
        let mut best: Option<SphereCastHit> = None;

        let mut consider = |hit: SphereCastHit| {
            if hit.distance <= max_distance && best.is_none_or(|b| hit.distance < b.distance) {
                best = Some(hit);
            }
        };

        if let Some(ground) = self.ground {
            // Only counts when the sphere starts clear of the plane and moves down
            let clearance = origin.y - radius - ground.height;
            if mask.contains(ground.layer) && clearance >= 0.0 && direction.y < -1e-6 {
                let distance = clearance / -direction.y;
                let center = origin + direction * distance;
                consider(SphereCastHit {
                    distance,
                    point: Vec3::new(center.x, ground.height, center.z),
                    normal: Vec3::Y,
                });
            }
        }

        for obstacle in self.boxes.iter().filter(|b| mask.contains(b.layer)) {
            let (min, max) = obstacle.expanded(radius);
            let Some(distance) = ray_aabb_entry(origin, direction, min, max) else {
                continue;
            };
            let center = origin + direction * distance;
            consider(SphereCastHit {
                distance,
                point: obstacle.closest_point(center),
                normal: aabb_surface_normal(center, min, max),
            });
        }

        best
    }
}

/// Entry distance of a ray into an AABB (slab method).
///
/// `None` when the ray misses, the box is behind the origin, or the origin
/// already lies inside the box.
pub fn ray_aabb_entry(ray_origin: Vec3, ray_dir: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Option<f32> {
    let inv = |d: f32| if d.abs() > 1e-10 { 1.0 / d } else { f32::MAX * d.signum() };
    let inv_dir = Vec3::new(inv(ray_dir.x), inv(ray_dir.y), inv(ray_dir.z));

    let t1 = (aabb_min - ray_origin) * inv_dir;
    let t2 = (aabb_max - ray_origin) * inv_dir;

    let t_min = t1.min(t2).max_element();
    let t_max = t1.max(t2).min_element();

    if t_max >= t_min && t_min >= 0.0 {
        Some(t_min)
    } else {
        None
    }
}

/// Outward normal of the AABB face closest to `point`.
pub fn aabb_surface_normal(point: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Vec3 {
    let center = (aabb_min + aabb_max) * 0.5;
    let half_extents = ((aabb_max - aabb_min) * 0.5).max(Vec3::splat(1e-6));
    let normalized = (point - center) / half_extents;
    let abs = normalized.abs();

    if abs.x >= abs.y && abs.x >= abs.z {
        Vec3::new(normalized.x.signum(), 0.0, 0.0)
    } else if abs.y >= abs.z {
        Vec3::new(0.0, normalized.y.signum(), 0.0)
    } else {
        Vec3::new(0.0, 0.0, normalized.z.signum())
    }
}
