//! Ray-sphere intersection.

use crate::{Collision, Hittable, Ray};
use glint_core::Sphere;

/// Discriminant band treated as a single tangent root.
pub const NULL_TOLERANCE: f32 = 1e-6;

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray) -> Option<Collision> {
        // |o + t d - c|^2 = r^2 with |d| = 1, so the quadratic's a term is 1
        let oc = ray.origin() - self.center;
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let root = b * b - 4.0 * c;
        if root < -NULL_TOLERANCE {
            return None;
        }

        let distance = if root > NULL_TOLERANCE {
            let sqrt_root = root.sqrt();
            let t0 = (-b + sqrt_root) / 2.0;
            let t1 = (-b - sqrt_root) / 2.0;
            t0.min(t1)
        } else {
            -b / 2.0
        };

        let position = ray.at(distance);
        Some(Collision {
            distance,
            position,
            normal: (position - self.center).normalize(),
            material: self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::Material;
    use glint_math::{Color, Vec3};

    fn red() -> Material {
        Material::new(Color::new(255, 0, 0), 0.5, 0.5)
    }

    #[test]
    fn test_sphere_hit_front() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, red());
        let ray = Ray::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::X);

        let collision = sphere.hit(&ray).unwrap();
        assert!((collision.distance - 4.0).abs() < 1e-5);
        assert!((collision.position - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-5);
        assert!((collision.normal - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-5);
        assert_eq!(collision.material, red());
    }

    #[test]
    fn test_hit_point_lies_on_surface() {
        let center = Vec3::new(2.0, -3.0, 7.0);
        let radius = 1.5;
        let sphere = Sphere::new(center, radius, red());

        for (direction, distance) in [
            (Vec3::new(1.0, 2.0, -0.5), 4.0),
            (Vec3::new(0.0, 0.0, 1.0), 12.0),
            (Vec3::new(-3.0, 1.0, 1.0), 2.5),
        ] {
            let direction = direction.normalize();
            let origin = center - direction * distance;
            let ray = Ray::new(origin, direction);

            let collision = sphere.hit(&ray).unwrap();
            let on_surface = ray.origin() + ray.direction() * collision.distance;
            assert!(((on_surface - center).length() - radius).abs() < 1e-4);
            assert!((collision.distance - (distance - radius)).abs() < 1e-4);
            assert!((collision.normal.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_sphere_behind_ray_reports_negative_distance() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, red());
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::X);

        let collision = sphere.hit(&ray).unwrap();
        assert!((collision.distance + 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, red());
        let ray = Ray::new(Vec3::new(-5.0, 2.0, 0.0), Vec3::X);

        assert!(sphere.hit(&ray).is_none());
    }

    #[test]
    fn test_tangent_hit_single_root() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, red());
        let ray = Ray::new(Vec3::new(-5.0, 1.0, 0.0), Vec3::X);

        let collision = sphere.hit(&ray).unwrap();
        assert!((collision.distance - 5.0).abs() < 1e-5);
        assert!((collision.normal - Vec3::Y).length() < 1e-5);
    }
}
