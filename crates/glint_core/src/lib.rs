//! Glint Core - scene description for the sphere ray caster.
//!
//! This crate provides:
//!
//! - **Surface description**: `Material`
//! - **Geometry**: `Sphere`
//! - **Scene container**: `Scene`, a bounded, validated list of spheres plus
//!   the ambient color seen by rays that escape
//!
//! # Example
//!
//! ```
//! use glint_core::{Material, Scene, Sphere};
//! use glint_math::{Color, Vec3};
//!
//! let mut scene = Scene::new(Color::new(20, 0, 20));
//! let red = Material::new(Color::new(255, 0, 0), 0.5, 0.5);
//! scene.add_sphere(Sphere::new(Vec3::new(0.0, -1.0, 0.0), 1.0, red))?;
//! assert_eq!(scene.len(), 1);
//! # Ok::<(), glint_core::SceneError>(())
//! ```

pub mod material;
pub mod scene;
pub mod sphere;

// Re-export commonly used types
pub use material::Material;
pub use scene::{Scene, SceneError, SceneResult, DEFAULT_SCENE_CAPACITY};
pub use sphere::Sphere;
