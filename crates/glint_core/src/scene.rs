//! Scene container.
//!
//! A scene is built once before rendering and only read while rendering.
//! Its sphere list is bounded: going over capacity or inserting a degenerate
//! sphere is a construction-time error rather than silent overflow.

use glint_math::Color;
use thiserror::Error;

use crate::Sphere;

/// Sphere capacity of a scene created with [`Scene::new`].
pub const DEFAULT_SCENE_CAPACITY: usize = 10;

/// Errors that can occur while building a scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Scene is full: capacity is {capacity} spheres")]
    CapacityExceeded { capacity: usize },

    #[error("Invalid sphere: radius {radius} must be finite and positive")]
    InvalidSphere { radius: f32 },
}

pub type SceneResult<T> = Result<T, SceneError>;

/// An ordered list of spheres plus the ambient (background) color.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    spheres: Vec<Sphere>,
    capacity: usize,
    ambient: Color,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Color::BLACK)
    }
}

impl Scene {
    /// Create an empty scene holding up to [`DEFAULT_SCENE_CAPACITY`] spheres.
    pub fn new(ambient: Color) -> Self {
        Self::with_capacity(ambient, DEFAULT_SCENE_CAPACITY)
    }

    /// Create an empty scene holding up to `capacity` spheres.
    ///
    /// `capacity` is only a limit; storage grows as spheres are added.
    pub fn with_capacity(ambient: Color, capacity: usize) -> Self {
        Self {
            spheres: Vec::new(),
            capacity,
            ambient,
        }
    }

    /// Add a sphere and return its index.
    pub fn add_sphere(&mut self, sphere: Sphere) -> SceneResult<usize> {
        if self.spheres.len() >= self.capacity {
            return Err(SceneError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        if !sphere.is_valid() {
            return Err(SceneError::InvalidSphere {
                radius: sphere.radius,
            });
        }

        let id = self.spheres.len();
        self.spheres.push(sphere);
        log::debug!(
            "Added sphere {} at ({:.2}, {:.2}, {:.2}) r={:.2}",
            id,
            sphere.center.x,
            sphere.center.y,
            sphere.center.z,
            sphere.radius
        );
        Ok(id)
    }

    /// Spheres in insertion order.
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Color seen by rays that hit nothing.
    pub fn ambient(&self) -> Color {
        self.ambient
    }

    /// Set the ambient color.
    pub fn with_ambient(mut self, ambient: Color) -> Self {
        self.ambient = ambient;
        self
    }

    /// Maximum number of spheres.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get sphere count.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// Check if the scene has no spheres.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}
