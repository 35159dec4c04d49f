//! Sphere primitive.

use glint_math::Vec3;

use crate::Material;

/// A sphere with a single material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// The radius is checked when the sphere is added to a `Scene`.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Whether the radius describes a real sphere (finite and positive).
    pub fn is_valid(&self) -> bool {
        self.radius.is_finite() && self.radius > 0.0 && self.center.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_validity() {
        let mat = Material::default();
        assert!(Sphere::new(Vec3::ZERO, 1.0, mat).is_valid());
        assert!(!Sphere::new(Vec3::ZERO, 0.0, mat).is_valid());
        assert!(!Sphere::new(Vec3::ZERO, -2.0, mat).is_valid());
        assert!(!Sphere::new(Vec3::ZERO, f32::INFINITY, mat).is_valid());
        assert!(!Sphere::new(Vec3::new(f32::NAN, 0.0, 0.0), 1.0, mat).is_valid());
    }
}
