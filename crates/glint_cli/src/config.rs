//! Render description files.
//!
//! A JSON file describing the camera, trace settings and scene. Every field
//! is optional; missing ones fall back to the built-in demo (two unit spheres,
//! red below and green above, seen from (-5, 0, 0)).
//!
//! ```json
//! {
//!   "camera": { "width": 320, "height": 240, "samples_per_pixel": 2 },
//!   "depth": 3,
//!   "rule": "nearest",
//!   "ambient": [20, 0, 20],
//!   "spheres": [
//!     { "center": [0, 0, 0], "radius": 1,
//!       "material": { "color": [255, 0, 0], "emitting": 0.5, "reflection": 0.5 } }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use glint_core::{Material, Scene, SceneResult, Sphere, DEFAULT_SCENE_CAPACITY};
use glint_math::{Color, Vec3};
use glint_renderer::{CameraOptions, RenderConfig, SelectionRule};
use serde::{Deserialize, Serialize};

/// Collision selection rule as spelled on the command line and in files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rule {
    #[default]
    Nearest,
    Farthest,
}

impl From<Rule> for SelectionRule {
    fn from(rule: Rule) -> Self {
        match rule {
            Rule::Nearest => SelectionRule::Nearest,
            Rule::Farthest => SelectionRule::Farthest,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraSection {
    pub origin: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
    pub view_distance: f32,
    pub width: u32,
    pub height: u32,
    pub pixel_size: f32,
    pub samples_per_pixel: u32,
}

impl Default for CameraSection {
    fn default() -> Self {
        let options = CameraOptions::default();
        Self {
            origin: options.origin.to_array(),
            yaw: options.yaw,
            pitch: options.pitch,
            view_distance: options.view_distance,
            width: options.width,
            height: options.height,
            pixel_size: options.pixel_size,
            samples_per_pixel: options.samples_per_pixel,
        }
    }
}

impl From<&CameraSection> for CameraOptions {
    fn from(section: &CameraSection) -> Self {
        CameraOptions {
            origin: Vec3::from_array(section.origin),
            yaw: section.yaw,
            pitch: section.pitch,
            view_distance: section.view_distance,
            width: section.width,
            height: section.height,
            pixel_size: section.pixel_size,
            samples_per_pixel: section.samples_per_pixel,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MaterialSection {
    pub color: [u8; 3],
    pub emitting: f32,
    pub reflection: f32,
    #[serde(default)]
    pub scattering: f32,
}

impl From<&MaterialSection> for Material {
    fn from(section: &MaterialSection) -> Self {
        Material::new(Color::from(section.color), section.emitting, section.reflection)
            .with_scattering(section.scattering)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereSection {
    pub center: [f32; 3],
    pub radius: f32,
    pub material: MaterialSection,
}

/// Everything needed to render one image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderFile {
    pub camera: CameraSection,
    pub depth: u32,
    pub rule: Rule,
    pub ambient: [u8; 3],
    pub capacity: usize,
    pub spheres: Vec<SphereSection>,
}

impl Default for RenderFile {
    fn default() -> Self {
        let sphere = |y: f32, color: [u8; 3]| SphereSection {
            center: [0.0, y, 0.0],
            radius: 1.0,
            material: MaterialSection {
                color,
                emitting: 0.5,
                reflection: 0.5,
                scattering: 0.0,
            },
        };

        Self {
            camera: CameraSection::default(),
            depth: 1,
            rule: Rule::Nearest,
            ambient: [20, 0, 20],
            capacity: DEFAULT_SCENE_CAPACITY,
            spheres: vec![sphere(-1.0, [255, 0, 0]), sphere(1.0, [0, 255, 0])],
        }
    }
}

impl RenderFile {
    /// Load a render description from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading render file {}", path.display()))?;
        let file = Self::from_json(&text)
            .with_context(|| format!("parsing render file {}", path.display()))?;
        log::info!(
            "Loaded {} with {} spheres",
            path.display(),
            file.spheres.len()
        );
        Ok(file)
    }

    /// Parse a render description from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build the scene, checking capacity and radii.
    pub fn build_scene(&self) -> SceneResult<Scene> {
        let mut scene = Scene::with_capacity(Color::from(self.ambient), self.capacity);
        for sphere in &self.spheres {
            scene.add_sphere(Sphere::new(
                Vec3::from_array(sphere.center),
                sphere.radius,
                Material::from(&sphere.material),
            ))?;
        }
        Ok(scene)
    }

    pub fn camera_options(&self) -> CameraOptions {
        CameraOptions::from(&self.camera)
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::with_depth(self.depth).with_selection(self.rule.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::SceneError;

    #[test]
    fn test_default_is_demo_scene() {
        let file = RenderFile::default();
        let scene = file.build_scene().unwrap();

        assert_eq!(scene.len(), 2);
        assert_eq!(scene.ambient(), Color::new(20, 0, 20));
        assert_eq!(scene.spheres()[0].center, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(scene.spheres()[0].material.color, Color::new(255, 0, 0));
        assert_eq!(scene.spheres()[1].material.color, Color::new(0, 255, 0));

        assert_eq!(file.camera_options(), CameraOptions::default());
        assert_eq!(file.render_config(), RenderConfig::with_depth(1));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = RenderFile::from_json(
            r#"{ "camera": { "width": 32, "height": 24 }, "depth": 4, "rule": "farthest" }"#,
        )
        .unwrap();

        assert_eq!(file.camera.width, 32);
        assert_eq!(file.camera.height, 24);
        assert_eq!(file.camera.pixel_size, 0.1);
        assert_eq!(file.depth, 4);
        assert_eq!(file.render_config().selection, SelectionRule::Farthest);
        assert_eq!(file.spheres.len(), 2);
    }

    #[test]
    fn test_spheres_from_json() {
        let file = RenderFile::from_json(
            r#"{
                "ambient": [1, 2, 3],
                "spheres": [
                    { "center": [4, 0, 0], "radius": 2,
                      "material": { "color": [10, 20, 30], "emitting": 1.0,
                                    "reflection": 0.25, "scattering": 0.5 } }
                ]
            }"#,
        )
        .unwrap();

        let scene = file.build_scene().unwrap();
        assert_eq!(scene.len(), 1);
        let sphere = scene.spheres()[0];
        assert_eq!(sphere.center, Vec3::new(4.0, 0.0, 0.0));
        assert_eq!(sphere.radius, 2.0);
        assert_eq!(sphere.material.reflection, 0.25);
        assert_eq!(sphere.material.scattering, 0.5);
        assert_eq!(scene.ambient(), Color::new(1, 2, 3));
    }

    #[test]
    fn test_bundled_scene_parses() {
        let file = RenderFile::from_json(include_str!("../../../scenes/mirrors.json")).unwrap();

        assert_eq!(file.depth, 4);
        assert_eq!(file.camera.width, 320);
        assert_eq!(file.build_scene().unwrap().len(), 3);
    }

    #[test]
    fn test_huge_capacity_builds() {
        let file = RenderFile::from_json(r#"{ "capacity": 18446744073709551615 }"#).unwrap();
        assert_eq!(file.capacity, usize::MAX);

        let scene = file.build_scene().unwrap();
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(RenderFile::from_json(r#"{ "bounces": 3 }"#).is_err());
    }

    #[test]
    fn test_capacity_enforced() {
        let mut file = RenderFile::default();
        file.capacity = 1;

        assert_eq!(
            file.build_scene(),
            Err(SceneError::CapacityExceeded { capacity: 1 })
        );
    }
}
