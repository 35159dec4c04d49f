//! A pixel and the group of sample rays it owns.
//!
//! Rays live in the camera's ray arena; a pixel only knows the index range of
//! its own samples and is handed that slice to work on. Every sample starts
//! from the same origin and direction, there is no jitter.

use std::ops::Range;

use crate::{ray_cast, Ray, RenderConfig};
use glint_core::Scene;
use glint_math::{Color, Vec3};

#[derive(Debug, Clone, PartialEq)]
pub struct Pixel {
    position: Vec3,
    origin: Vec3,
    direction: Vec3,
    color: Color,
    rays: Range<usize>,
}

impl Pixel {
    /// Create a pixel at `position` on the view plane owning arena range `rays`.
    ///
    /// The rays themselves are aimed later with [`Pixel::reset_rays`].
    pub fn new(origin: Vec3, position: Vec3, rays: Range<usize>) -> Self {
        Self {
            position,
            origin,
            direction: (position - origin).normalize(),
            color: Color::BLACK,
            rays,
        }
    }

    /// Put every sample ray back at the camera origin, aimed at this pixel.
    ///
    /// `samples` is this pixel's slice of the arena.
    pub fn reset_rays(&self, samples: &mut [Ray]) {
        for ray in samples {
            ray.reset(self.origin, self.direction);
        }
    }

    /// Trace each sample ray and store the mean of their colors.
    ///
    /// An empty slice leaves the pixel black.
    pub fn take_picture(&mut self, samples: &mut [Ray], scene: &Scene, config: &RenderConfig) {
        if samples.is_empty() {
            self.color = Color::BLACK;
            return;
        }

        let mut total_red = 0.0f32;
        let mut total_green = 0.0f32;
        let mut total_blue = 0.0f32;

        for ray in samples.iter_mut() {
            ray_cast(ray, scene, config);
            total_red += ray.color.r as f32;
            total_green += ray.color.g as f32;
            total_blue += ray.color.b as f32;
        }

        let samples = samples.len() as f32;
        self.color = Color::from_channels(
            total_red / samples,
            total_green / samples,
            total_blue / samples,
        );
    }

    /// World position on the view plane.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Color from the last `take_picture`, black before that.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Index range of this pixel's rays in the arena.
    pub fn rays(&self) -> Range<usize> {
        self.rays.clone()
    }

    /// Number of sample rays.
    pub fn samples(&self) -> usize {
        self.rays.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Material, Sphere};

    #[test]
    fn test_pixel_init_aims_rays() {
        let mut arena = vec![Ray::default(); 6];
        let origin = Vec3::new(-5.0, 0.0, 0.0);
        let position = Vec3::new(25.0, 3.0, -4.0);

        let pixel = Pixel::new(origin, position, 2..5);
        assert_eq!(pixel.samples(), 3);
        assert_eq!(pixel.color(), Color::BLACK);
        // Construction leaves the arena alone
        assert!(arena.iter().all(|ray| *ray == Ray::default()));

        pixel.reset_rays(&mut arena[pixel.rays()]);
        let expected = (position - origin).normalize();
        for ray in &arena[2..5] {
            assert_eq!(ray.origin(), origin);
            assert!((ray.direction() - expected).length() < 1e-6);
            assert!((ray.direction().length() - 1.0).abs() < 1e-6);
        }
        // Rays outside the range are untouched
        assert_eq!(arena[0], Ray::default());
        assert_eq!(arena[5], Ray::default());
    }

    #[test]
    fn test_take_picture_averages_samples() {
        let mut scene = Scene::new(Color::new(20, 0, 20));
        scene
            .add_sphere(Sphere::new(
                Vec3::ZERO,
                1.0,
                Material::new(Color::new(255, 0, 0), 0.5, 0.5),
            ))
            .unwrap();

        let mut arena = vec![Ray::default(); 4];
        let mut pixel = Pixel::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::new(25.0, 0.0, 0.0), 0..4);
        pixel.reset_rays(&mut arena);
        pixel.take_picture(&mut arena, &scene, &RenderConfig::with_depth(1));

        // Identical samples average to the single-ray color
        assert_eq!(pixel.color(), Color::new(63, 0, 0));
        assert!(arena.iter().all(|ray| ray.color == Color::new(63, 0, 0)));
    }

    #[test]
    fn test_mean_truncates() {
        // Samples that differ: one ray hits, then the arena is doctored so the
        // second starts somewhere that misses.
        let mut scene = Scene::new(Color::new(0, 0, 0));
        scene
            .add_sphere(Sphere::new(
                Vec3::ZERO,
                1.0,
                Material::new(Color::new(255, 255, 255), 1.0, 1.0),
            ))
            .unwrap();

        let mut arena = vec![Ray::default(); 2];
        let mut pixel = Pixel::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::ZERO, 0..2);
        pixel.reset_rays(&mut arena);
        arena[1].reset(Vec3::new(-5.0, 5.0, 0.0), Vec3::X);
        pixel.take_picture(&mut arena, &scene, &RenderConfig::with_depth(1));

        // (255 + 0) / 2 = 127.5
        assert_eq!(pixel.color(), Color::new(127, 127, 127));
    }

    #[test]
    fn test_empty_slice_stays_black() {
        let scene = Scene::new(Color::new(20, 0, 20));
        let mut pixel = Pixel::new(Vec3::ZERO, Vec3::X, 0..0);

        pixel.take_picture(&mut [], &scene, &RenderConfig::with_depth(1));
        assert_eq!(pixel.color(), Color::BLACK);
    }
}
