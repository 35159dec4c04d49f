// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod color;
mod interval;
pub use color::Color;
pub use interval::Interval;

/// Mirror `v` about the unit normal `n`.
///
/// Returns: v - 2 (v . n) n
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
