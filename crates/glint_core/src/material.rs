//! Surface material.

use glint_math::Color;

/// How a surface contributes to the color of a ray that bounces off it.
///
/// The weights are free-form floats and are not required to sum to one;
/// the tracer combines them as an ad-hoc weighted average.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Surface color
    pub color: Color,

    /// Light weight contributed by this surface
    pub emitting: f32,

    /// Weight applied to `color`
    pub reflection: f32,

    /// Carried for scene descriptions, not read by the tracer
    pub scattering: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            emitting: 0.0,
            reflection: 0.0,
            scattering: 0.0,
        }
    }
}

impl Material {
    /// Create a material with no scattering.
    pub fn new(color: Color, emitting: f32, reflection: f32) -> Self {
        Self {
            color,
            emitting,
            reflection,
            scattering: 0.0,
        }
    }

    /// Set the scattering weight.
    pub fn with_scattering(mut self, scattering: f32) -> Self {
        self.scattering = scattering;
        self
    }

    /// The material recorded for a ray that escapes into the background.
    ///
    /// Full light and full reflection of the ambient color, so a ray lost on
    /// its first bounce comes back exactly as `ambient`.
    pub fn background(ambient: Color) -> Self {
        Self::new(ambient, 1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_new() {
        let mat = Material::new(Color::new(255, 0, 0), 0.5, 0.25);
        assert_eq!(mat.color, Color::new(255, 0, 0));
        assert_eq!(mat.emitting, 0.5);
        assert_eq!(mat.reflection, 0.25);
        assert_eq!(mat.scattering, 0.0);
        assert_eq!(mat.with_scattering(0.3).scattering, 0.3);
    }

    #[test]
    fn test_background_material() {
        let bg = Material::background(Color::new(20, 0, 20));
        assert_eq!(bg.color, Color::new(20, 0, 20));
        assert_eq!(bg.emitting, 1.0);
        assert_eq!(bg.reflection, 1.0);
    }
}
