//! Image output.
//!
//! The camera hands out an [`ImageBuffer`] of 8-bit RGB colors in row-major
//! order. This module turns it into bytes:
//!
//! - plain-text PPM (`P3`), written by hand
//! - PNG and JPEG (quality 90), through the `image` crate

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use glint_math::Color;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use thiserror::Error;

/// JPEG quality used for `.jpg` / `.jpeg` output.
pub const JPEG_QUALITY: u8 = 90;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unknown image format for {0}: file must end in .png, .jpg, .jpeg or .ppm")]
    UnknownFormat(String),
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Supported output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Ppm,
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Pick the format from a path's extension (case-insensitive).
    pub fn from_path(path: impl AsRef<Path>) -> OutputResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("ppm") => Ok(ImageFormat::Ppm),
            Some("png") => Ok(ImageFormat::Png),
            Some("jpg") | Some("jpeg") => Ok(ImageFormat::Jpeg),
            _ => Err(OutputError::UnknownFormat(path.display().to_string())),
        }
    }
}

/// Rendered image: row-major 8-bit RGB.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Wrap row-major colors. `pixels.len()` must be `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Interleaved RGB bytes, row-major, without copying.
    pub fn as_rgb_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// Write the image as plain-text PPM.
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> OutputResult<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for color in &image.pixels {
        writeln!(writer, "{} {} {}", color.r, color.g, color.b)?;
    }

    writer.flush()?;
    Ok(())
}

/// Encode the image in `format` to `writer`.
pub fn encode<W: Write>(image: &ImageBuffer, format: ImageFormat, mut writer: W) -> OutputResult<()> {
    match format {
        ImageFormat::Ppm => write_ppm(image, writer),
        ImageFormat::Png => {
            PngEncoder::new(&mut writer).write_image(
                image.as_rgb_bytes(),
                image.width,
                image.height,
                ColorType::Rgb8,
            )?;
            writer.flush()?;
            Ok(())
        }
        ImageFormat::Jpeg => {
            JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY).encode(
                image.as_rgb_bytes(),
                image.width,
                image.height,
                ColorType::Rgb8,
            )?;
            writer.flush()?;
            Ok(())
        }
    }
}

/// Save the image, choosing the encoding from the file extension.
pub fn save(image: &ImageBuffer, path: impl AsRef<Path>) -> OutputResult<ImageFormat> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)?;
    let writer = BufWriter::new(File::create(path)?);

    encode(image, format, writer)?;
    log::info!(
        "Wrote {}x{} {:?} image to {}",
        image.width,
        image.height,
        format,
        path.display()
    );
    Ok(format)
}
