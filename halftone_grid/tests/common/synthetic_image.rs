use halftone_grid::{Pixel, SourceImage};

/// A uniform image of the given colour.
pub fn solid(width: u32, height: u32, pixel: Pixel) -> SourceImage {
    SourceImage::filled(width, height, pixel).expect("solid image")
}

/// White image with the listed pixels painted black.
pub fn white_with_black_dots(width: u32, height: u32, dots: &[(u32, u32)]) -> SourceImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut pixels = vec![Pixel::WHITE; (width * height) as usize];
    for &(x, y) in dots {
        pixels[(y * width + x) as usize] = Pixel::BLACK;
    }
    SourceImage::new(width, height, pixels).expect("dotted image")
}

/// Left-to-right gray ramp, black on the left edge and white on the right.
pub fn horizontal_ramp(width: u32, height: u32) -> SourceImage {
    assert!(width > 1, "a ramp needs at least two columns");
    let pixels = (0..height)
        .flat_map(|_| (0..width).map(move |x| Pixel::gray((x * 255 / (width - 1)) as u8)))
        .collect();
    SourceImage::new(width, height, pixels).expect("ramp image")
}
