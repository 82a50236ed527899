//! Frame-scaled smoothing helpers shared by the controllers.
//!
//! All smoothing in the rig is "exponential approach": every frame a value
//! moves a fraction `rate * dt` of the way toward its target. The fraction is
//! clamped to `[0, 1]` so a long frame snaps to the target instead of
//! overshooting it.

use glam::{Mat3, Quat, Vec3};

/// Interpolation fraction for one frame of exponential approach.
#[inline]
pub fn smoothing_factor(rate: f32, dt: f32) -> f32 {
    (rate * dt).clamp(0.0, 1.0)
}

/// Linear interpolation between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp `value` into the range spanned by `a` and `b`, in either order.
///
/// Never panics: inverted bounds are swapped and a NaN bound is ignored.
#[inline]
pub fn clamp_range(value: f32, a: f32, b: f32) -> f32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    value.max(lo).min(hi)
}

/// Launch speed needed to reach `height` under `gravity` (negative, m/s^2).
///
/// Solves `v^2 = 2 * g * h` for `v`. A non-negative gravity yields zero.
#[inline]
pub fn launch_velocity(height: f32, gravity: f32) -> f32 {
    (height * -2.0 * gravity).max(0.0).sqrt()
}

/// Rotation that maps `+Z` onto `forward` while keeping `+Y` as close to `up`
/// as possible.
///
/// Returns `None` when `forward` has no usable length.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Option<Quat> {
    let z = forward.try_normalize()?;
    match up.cross(z).try_normalize() {
        Some(x) => {
            let y = z.cross(x);
            Some(Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize())
        }
        // Looking straight along `up`
        None => Some(Quat::from_rotation_arc(Vec3::Z, z)),
    }
}
