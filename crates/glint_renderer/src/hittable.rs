//! Hittable trait and Collision record for ray-object intersection.

use crate::Ray;
use glint_core::Material;
use glint_math::Vec3;

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    /// Ray parameter of the hit. May be negative (behind the ray origin).
    pub distance: f32,
    /// Point of intersection
    pub position: Vec3,
    /// Outward surface normal, unit length
    pub normal: Vec3,
    /// Copy of the material at the intersection point
    pub material: Material,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable {
    /// Intersect the ray's full line with this object.
    ///
    /// No distance window is applied; callers decide which hits count.
    fn hit(&self, ray: &Ray) -> Option<Collision>;
}
