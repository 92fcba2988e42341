// THEORY:
// `SourceImage` is the decoded input the core reads: a row-major grid of `Pixel`s
// with a known width and height. It can only be constructed non-empty and with a
// buffer that matches its dimensions, so every later stage can index it without
// re-checking.

use crate::core_modules::pixel::pixel::Pixel;
use crate::error::{HalftoneError, Result};

const CHANNELS: usize = 3;

/// An immutable, non-empty grid of source pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl SourceImage {
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(HalftoneError::EmptyImage { width, height });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(HalftoneError::BufferMismatch { expected, actual: pixels.len() });
        }
        Ok(Self { width, height, pixels })
    }

    /// Builds an image from interleaved blue-green-red bytes.
    pub fn from_bgr_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if width > 0 && height > 0 && bytes.len() != expected {
            return Err(HalftoneError::BufferMismatch { expected, actual: bytes.len() });
        }
        let pixels = bytes
            .chunks_exact(CHANNELS)
            .map(|bgr| Pixel::new(bgr[0], bgr[1], bgr[2]))
            .collect();
        Self::new(width, height, pixels)
    }

    pub fn from_rgb_image(image: &image::RgbImage) -> Result<Self> {
        let pixels = image.pixels().map(|rgb| Pixel::from(*rgb)).collect();
        Self::new(image.width(), image.height(), pixels)
    }

    /// An image where every pixel is `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Result<Self> {
        Self::new(width, height, vec![pixel; width as usize * height as usize])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Pixel {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    #[inline]
    pub fn row(&self, y: u32) -> &[Pixel] {
        let start = y as usize * self.width as usize;
        &self.pixels[start..start + self.width as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn zero_dimensions_are_invalid_input() {
        let err = SourceImage::new(0, 3, Vec::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(matches!(err, HalftoneError::EmptyImage { width: 0, height: 3 }));

        let err = SourceImage::from_bgr_bytes(4, 0, &[]).unwrap_err();
        assert!(matches!(err, HalftoneError::EmptyImage { .. }));
    }

    #[test]
    fn short_buffers_are_rejected() {
        let err = SourceImage::from_bgr_bytes(2, 2, &[0u8; 11]).unwrap_err();
        assert!(matches!(err, HalftoneError::BufferMismatch { expected: 12, actual: 11 }));
    }

    #[test]
    fn bgr_bytes_are_row_major() {
        let bytes = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let image = SourceImage::from_bgr_bytes(2, 2, &bytes).expect("valid image");
        assert_eq!(image.pixel(1, 0), Pixel::new(4, 5, 6));
        assert_eq!(image.pixel(0, 1).red, 9);
        assert_eq!(image.row(1), &[Pixel::new(7, 8, 9), Pixel::new(10, 11, 12)]);
        assert_eq!(image.pixels().len(), 4);
        assert_eq!(image.pixels()[1], image.pixel(1, 0));
    }

    #[test]
    fn rgb_images_are_reordered() {
        let rgb = image::RgbImage::from_pixel(3, 1, image::Rgb([200, 100, 50]));
        let image = SourceImage::from_rgb_image(&rgb).expect("valid image");
        assert_eq!(image.width(), 3);
        assert_eq!(image.pixel(2, 0), Pixel::new(50, 100, 200));
    }
}
