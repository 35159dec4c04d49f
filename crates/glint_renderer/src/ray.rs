//! Ray type for the bounce tracer.
//!
//! Besides its line (origin + unit direction) a ray carries the state the
//! tracer mutates: how many bounces it has taken, whether the last bounce
//! escaped the scene, and the color it resolved to.

use glint_math::{reflect, Color, Vec3};

/// A ray with origin, unit direction and trace state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray
    origin: Vec3,
    /// Direction vector, always normalized
    direction: Vec3,
    /// Color resolved by the last trace
    pub color: Color,
    /// Bounces taken by the last trace
    pub bounce_count: u32,
    /// Whether the last bounce hit nothing
    pub lost: bool,
}

impl Ray {
    /// Create a new ray. `direction` is normalized.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
            color: Color::BLACK,
            bounce_count: 0,
            lost: false,
        }
    }

    /// Restart the ray from `origin` along `direction`, clearing trace state.
    #[inline]
    pub fn reset(&mut self, origin: Vec3, direction: Vec3) {
        *self = Self::new(origin, direction);
    }

    /// Get the ray's origin point.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the ray's unit direction.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Compute a point along the ray at parameter t.
    /// P(t) = origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }

    /// Move the ray to `position` and mirror its direction about `normal`.
    pub fn bounce(&mut self, position: Vec3, normal: Vec3) {
        self.origin = position;
        self.direction = reflect(self.direction, normal).normalize();
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            direction: Vec3::X,
            color: Color::BLACK,
            bounce_count: 0,
            lost: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));

        assert_eq!(ray.at(0.0), Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(ray.at(1.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(ray.at(2.5), Vec3::new(2.5, 0.0, 0.0));
    }

    #[test]
    fn test_direction_is_normalized() {
        for direction in [
            Vec3::new(30.0, 0.0, 0.0),
            Vec3::new(0.0, -0.002, 0.0),
            Vec3::new(30.0, -12.05, 23.95),
        ] {
            let ray = Ray::new(Vec3::ONE, direction);
            assert!((ray.direction().length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_reset_clears_state() {
        let mut ray = Ray::new(Vec3::ZERO, Vec3::X);
        ray.color = Color::WHITE;
        ray.bounce_count = 4;
        ray.lost = true;
        ray.bounce(Vec3::new(3.0, 0.0, 0.0), -Vec3::X);

        ray.reset(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray, Ray::new(Vec3::ZERO, Vec3::X));
    }

    #[test]
    fn test_bounce_mirrors_direction() {
        let mut ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, -1.0, 0.0));
        ray.bounce(Vec3::new(1.0, -1.0, 0.0), Vec3::Y);

        assert_eq!(ray.origin(), Vec3::new(1.0, -1.0, 0.0));
        assert!((ray.direction() - Vec3::new(1.0, 1.0, 0.0).normalize()).length() < 1e-6);
        assert!((ray.direction().length() - 1.0).abs() < 1e-6);
    }
}
