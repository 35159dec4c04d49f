//! Glint Renderer - CPU sphere ray caster.
//!
//! Casts one group of identical sample rays per pixel from a fixed camera,
//! bounces each ray off the scene's spheres up to a fixed depth, and folds
//! the materials it met into an 8-bit color.
//!
//! ```
//! use glint_core::{Material, Scene, Sphere};
//! use glint_math::{Color, Vec3};
//! use glint_renderer::{Camera, CameraOptions};
//!
//! let mut scene = Scene::new(Color::new(20, 0, 20));
//! scene.add_sphere(Sphere::new(Vec3::ZERO, 1.0, Material::new(Color::WHITE, 0.5, 0.5)))?;
//!
//! let mut camera = Camera::new(&CameraOptions::default().with_resolution(16, 12))?;
//! camera.take_picture(&scene, 2);
//! let image = camera.image();
//! assert_eq!(image.pixels.len(), 16 * 12);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod ray;
mod hittable;
mod sphere;
mod renderer;
mod pixel;
mod camera;
pub mod output;

pub use ray::Ray;
pub use hittable::{Collision, Hittable};
pub use sphere::NULL_TOLERANCE;
pub use renderer::{ray_cast, select_collision, RenderConfig, SelectionRule, HIT_EPSILON};
pub use pixel::Pixel;
pub use camera::{Camera, CameraError, CameraOptions, CameraResult};
pub use output::{save, write_ppm, ImageBuffer, ImageFormat, OutputError};

/// Re-export common types from glint_math and glint_core
pub use glint_math::{Color, Vec3};
pub use glint_core::{Material, Scene, Sphere};
