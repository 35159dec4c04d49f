//! Camera: the pixel grid and the ray arena behind it.
//!
//! The camera looks down +X. Its image plane sits `view_distance` in front of
//! the origin, with image columns running along +Y and rows running down -Z.
//! One ray buffer holds `width * height * samples_per_pixel` rays; pixel
//! `y * width + x` owns the contiguous range starting at
//! `(y * width + x) * samples_per_pixel`.

use std::time::Instant;

use crate::{Pixel, Ray, RenderConfig};
use crate::output::ImageBuffer;
use glint_core::Scene;
use glint_math::{Color, Vec3};
use thiserror::Error;

/// Errors that can occur while building a camera.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    #[error("Invalid camera options: {0}")]
    InvalidOptions(String),

    #[error("Out of memory allocating {what} ({count} elements)")]
    OutOfMemory { what: &'static str, count: usize },

    #[error("Pixel ray ranges do not partition the ray buffer: {0}")]
    RayPartition(String),
}

pub type CameraResult<T> = Result<T, CameraError>;

/// Settings used to build a [`Camera`].
#[derive(Debug, Clone, PartialEq)]
pub struct CameraOptions {
    pub origin: Vec3,
    /// Rotation about the vertical axis, radians. Not applied yet.
    pub yaw: f32,
    /// Rotation about the horizontal axis, radians. Not applied yet.
    pub pitch: f32,
    /// Distance from the origin to the image plane
    pub view_distance: f32,
    pub width: u32,
    pub height: u32,
    /// World-space edge length of one pixel
    pub pixel_size: f32,
    pub samples_per_pixel: u32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            origin: Vec3::new(-5.0, 0.0, 0.0),
            yaw: 0.0,
            pitch: 0.0,
            view_distance: 30.0,
            width: 640,
            height: 480,
            pixel_size: 0.1,
            samples_per_pixel: 1,
        }
    }
}

impl CameraOptions {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set samples per pixel.
    pub fn with_samples(mut self, samples_per_pixel: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self
    }

    /// Set camera position and orientation.
    pub fn with_position(mut self, origin: Vec3, yaw: f32, pitch: f32) -> Self {
        self.origin = origin;
        self.yaw = yaw;
        self.pitch = pitch;
        self
    }

    /// Set image plane distance and pixel size.
    pub fn with_view_plane(mut self, view_distance: f32, pixel_size: f32) -> Self {
        self.view_distance = view_distance;
        self.pixel_size = pixel_size;
        self
    }

    fn validate(&self) -> CameraResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CameraError::InvalidOptions(format!(
                "resolution {}x{} must be non-zero",
                self.width, self.height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(CameraError::InvalidOptions(
                "samples per pixel must be non-zero".to_string(),
            ));
        }
        if !(self.pixel_size.is_finite() && self.pixel_size > 0.0) {
            return Err(CameraError::InvalidOptions(format!(
                "pixel size {} must be finite and positive",
                self.pixel_size
            )));
        }
        if !self.origin.is_finite() || !self.view_distance.is_finite() {
            return Err(CameraError::InvalidOptions(
                "origin and view distance must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// Camera owning the pixel grid and every sample ray.
#[derive(Debug, Clone)]
pub struct Camera {
    origin: Vec3,
    width: u32,
    height: u32,
    rays: Vec<Ray>,
    pixels: Vec<Pixel>,
}

impl Camera {
    /// Build the pixel grid and aim every ray.
    pub fn new(options: &CameraOptions) -> CameraResult<Self> {
        options.validate()?;

        let samples = options.samples_per_pixel as usize;
        let pixel_count = (options.width as usize)
            .checked_mul(options.height as usize)
            .ok_or_else(|| CameraError::InvalidOptions("pixel count overflows".to_string()))?;
        let ray_count = pixel_count
            .checked_mul(samples)
            .ok_or_else(|| CameraError::InvalidOptions("ray count overflows".to_string()))?;

        let mut rays = Vec::new();
        rays.try_reserve_exact(ray_count)
            .map_err(|_| CameraError::OutOfMemory {
                what: "ray buffer",
                count: ray_count,
            })?;
        rays.resize(ray_count, Ray::default());

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(pixel_count)
            .map_err(|_| CameraError::OutOfMemory {
                what: "pixel buffer",
                count: pixel_count,
            })?;

        if options.yaw != 0.0 || options.pitch != 0.0 {
            log::warn!(
                "Camera yaw/pitch ({}, {}) are not applied; looking down +X",
                options.yaw,
                options.pitch
            );
        }

        let (upper_left, horizontal, vertical) = view_plane(options);

        for y in 0..options.height {
            for x in 0..options.width {
                let position = upper_left + horizontal * x as f32 + vertical * y as f32;
                let index = y as usize * options.width as usize + x as usize;
                let start = index * samples;
                pixels.push(Pixel::new(options.origin, position, start..start + samples));
            }
        }

        // Ranges are checked before any of them is used to slice the arena
        check_partition(&pixels, ray_count, samples)?;
        for pixel in &pixels {
            if let Some(sample_rays) = rays.get_mut(pixel.rays()) {
                pixel.reset_rays(sample_rays);
            }
        }

        log::debug!(
            "Camera ready: {}x{} pixels, {} rays",
            options.width,
            options.height,
            ray_count
        );

        Ok(Self {
            origin: options.origin,
            width: options.width,
            height: options.height,
            rays,
            pixels,
        })
    }

    /// Trace every pixel, row-major, with the default selection rule.
    pub fn take_picture(&mut self, scene: &Scene, depth: u32) {
        self.take_picture_with(scene, &RenderConfig::with_depth(depth));
    }

    /// Trace every pixel, row-major.
    ///
    /// Rays are re-aimed first, so repeated calls give the same image.
    pub fn take_picture_with(&mut self, scene: &Scene, config: &RenderConfig) {
        let start = Instant::now();

        for pixel in &mut self.pixels {
            if let Some(sample_rays) = self.rays.get_mut(pixel.rays()) {
                pixel.reset_rays(sample_rays);
                pixel.take_picture(sample_rays, scene, config);
            }
        }

        log::info!(
            "Traced {} rays ({} spheres, depth {}) in {:?}",
            self.rays.len(),
            scene.len(),
            config.max_depth,
            start.elapsed()
        );
    }

    /// Pixels in row-major order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Get the pixel at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> Option<&Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize)
    }

    /// The ray arena.
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    /// Copy the pixel colors out for encoding.
    pub fn image(&self) -> ImageBuffer {
        let colors: Vec<Color> = self.pixels.iter().map(Pixel::color).collect();
        ImageBuffer::from_pixels(self.width, self.height, colors)
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Upper-left pixel position and the per-pixel horizontal/vertical steps.
fn view_plane(options: &CameraOptions) -> (Vec3, Vec3, Vec3) {
    let o = options.origin;
    let size = options.pixel_size;
    let half_width = options.width as f32 / 2.0 * size;
    let half_height = options.height as f32 / 2.0 * size;
    let half_pixel = size / 2.0;
    let plane_x = o.x + options.view_distance;

    let upper_left = Vec3::new(
        plane_x,
        o.y - half_width - half_pixel,
        o.z + half_height - half_pixel,
    );
    let upper_right = Vec3::new(
        plane_x,
        o.y + half_width - half_pixel,
        o.z + half_height - half_pixel,
    );
    let bottom_left = Vec3::new(
        plane_x,
        o.y - half_width - half_pixel,
        o.z - half_height - half_pixel,
    );

    let upper_left = orient(upper_left, options.yaw, options.pitch);
    let upper_right = orient(upper_right, options.yaw, options.pitch);
    let bottom_left = orient(bottom_left, options.yaw, options.pitch);

    let horizontal = (upper_right - upper_left).normalize() * size;
    let vertical = (bottom_left - upper_left).normalize() * size;

    (upper_left, horizontal, vertical)
}

/// Rotate a view-plane corner by yaw and pitch.
///
/// Identity for now: the camera always looks down +X.
// TODO: rotate about the camera origin once yaw/pitch conventions are fixed
fn orient(point: Vec3, _yaw: f32, _pitch: f32) -> Vec3 {
    point
}

/// Verify pixel ray ranges are in order, `samples` long, and cover the arena.
fn check_partition(pixels: &[Pixel], ray_count: usize, samples: usize) -> CameraResult<()> {
    let mut cursor = 0;
    for (index, pixel) in pixels.iter().enumerate() {
        let range = pixel.rays();
        if range.start != cursor || pixel.samples() != samples {
            return Err(CameraError::RayPartition(format!(
                "pixel {} owns rays {:?}, expected {}..{}",
                index,
                range,
                cursor,
                cursor + samples
            )));
        }
        cursor = range.end;
    }
    if cursor != ray_count {
        return Err(CameraError::RayPartition(format!(
            "pixels cover {} of {} rays",
            cursor, ray_count
        )));
    }
    Ok(())
}
