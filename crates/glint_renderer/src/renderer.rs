//! Bounce tracer.
//!
//! Drives a ray through up to `max_depth` bounces against every sphere in
//! the scene and folds the materials it met into a single color:
//!
//! ```text
//! channel = (sum(color.channel * reflection) / n) * (sum(emitting) / n)
//! ```
//!
//! where `n` is the number of bounces taken. This is a weighted average, not
//! a radiometric model, and the arithmetic is kept in f32 in bounce order so
//! results match the reference renders bit for bit.

use crate::{Collision, Hittable, Ray};
use glint_core::{Material, Scene, Sphere};
use glint_math::{Color, Interval};

/// Hits closer than this to the ray origin are ignored.
///
/// Keeps a bounced ray from colliding with the surface it just left, and
/// keeps spheres behind the ray from governing a bounce.
pub const HIT_EPSILON: f32 = 1e-3;

/// Which collision governs a bounce when several spheres are hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionRule {
    /// Smallest distance in front of the ray
    #[default]
    Nearest,
    /// Largest distance in front of the ray, as the reference renderer picks
    Farthest,
}

impl SelectionRule {
    /// Whether `candidate` should replace `current`. Ties keep `current`.
    #[inline]
    fn prefers(self, candidate: f32, current: f32) -> bool {
        match self {
            SelectionRule::Nearest => candidate < current,
            SelectionRule::Farthest => candidate > current,
        }
    }
}

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Collision selection rule
    pub selection: SelectionRule,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 1,
            selection: SelectionRule::Nearest,
        }
    }
}

impl RenderConfig {
    /// Configuration with the given depth and the default selection rule.
    pub fn with_depth(max_depth: u32) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Set the selection rule.
    pub fn with_selection(mut self, selection: SelectionRule) -> Self {
        self.selection = selection;
        self
    }
}

/// Running totals over the materials a ray met.
#[derive(Debug, Default)]
struct BounceTotals {
    red: f32,
    green: f32,
    blue: f32,
    light: f32,
}

impl BounceTotals {
    fn add(&mut self, material: &Material) {
        self.light += material.emitting;
        self.red += material.color.r as f32 * material.reflection;
        self.green += material.color.g as f32 * material.reflection;
        self.blue += material.color.b as f32 * material.reflection;
    }

    fn resolve(&self, bounces: u32) -> Color {
        if bounces == 0 {
            return Color::BLACK;
        }
        let n = bounces as f32;
        let light = self.light / n;
        Color::from_channels(
            (self.red / n) * light,
            (self.green / n) * light,
            (self.blue / n) * light,
        )
    }
}

/// Find the collision that governs this bounce, if any.
pub fn select_collision(ray: &Ray, spheres: &[Sphere], rule: SelectionRule) -> Option<Collision> {
    let window = Interval::beyond(HIT_EPSILON);

    spheres
        .iter()
        .filter_map(|sphere| sphere.hit(ray))
        .filter(|collision| window.surrounds(collision.distance))
        .reduce(|best, candidate| {
            if rule.prefers(candidate.distance, best.distance) {
                candidate
            } else {
                best
            }
        })
}

/// Trace a ray through the scene and store the resolved color on it.
///
/// Updates `ray.color`, `ray.bounce_count` and `ray.lost`. A ray that hits
/// nothing records the scene's ambient color at full weight and stops.
pub fn ray_cast(ray: &mut Ray, scene: &Scene, config: &RenderConfig) {
    let mut totals = BounceTotals::default();

    for bounce in 0..config.max_depth {
        let collision = select_collision(ray, scene.spheres(), config.selection);
        ray.bounce_count += 1;

        let Some(collision) = collision else {
            ray.lost = true;
            totals.add(&Material::background(scene.ambient()));
            break;
        };

        ray.lost = false;
        totals.add(&collision.material);

        if bounce + 1 == config.max_depth {
            break;
        }

        ray.bounce(collision.position, collision.normal);
    }

    ray.color = totals.resolve(ray.bounce_count);
}
