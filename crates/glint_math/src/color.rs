//! 8-bit RGB color.

use bytemuck::{Pod, Zeroable};

/// An RGB color with one byte per channel.
///
/// `#[repr(C)]` and `Pod` so a `&[Color]` can be handed to encoders as raw
/// interleaved RGB bytes without copying.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a new color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Truncate floating point channel values to bytes.
    ///
    /// Values above 255 saturate, negatives and NaN become 0.
    #[inline]
    pub fn from_channels(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r as u8,
            g: g as u8,
            b: b as u8,
        }
    }

    /// Channels as `[r, g, b]`.
    #[inline]
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}
