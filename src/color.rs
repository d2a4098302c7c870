//! Color types: normalized RGB for geometry, 8-bit RGB for the pixel buffer.

use serde::{Deserialize, Serialize};

/// 8-bit color as written into a [`PixelBuffer`](crate::display::PixelBuffer)
pub type Rgb8 = (u8, u8, u8);

/// RGB color with each channel in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Rgb = Rgb { r: 1.0, g: 1.0, b: 1.0 };

    /// Build a color, clamping every channel into `[0, 1]`. NaN becomes 0.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
        }
    }

    /// Uniform gray
    pub fn gray(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Convert to 8-bit channels (rounded)
    #[inline]
    pub fn to_rgb8(self) -> Rgb8 {
        (to_byte(self.r), to_byte(self.g), to_byte(self.b))
    }
}

#[inline]
fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

#[inline]
fn to_byte(v: f32) -> u8 {
    (clamp_unit(v) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_channels() {
        let c = Rgb::new(-0.5, 0.5, 1.7);
        assert_eq!(c.r, 0.0);
        assert_eq!(c.g, 0.5);
        assert_eq!(c.b, 1.0);
    }

    #[test]
    fn test_nan_channel_is_zero() {
        assert_eq!(Rgb::new(f32::NAN, 1.0, 1.0).r, 0.0);
    }

    #[test]
    fn test_to_rgb8() {
        assert_eq!(Rgb::WHITE.to_rgb8(), (255, 255, 255));
        assert_eq!(Rgb::BLACK.to_rgb8(), (0, 0, 0));
        assert_eq!(Rgb::new(0.0, 0.4, 1.0).to_rgb8(), (0, 102, 255));
    }
}
