// THEORY:
// `OutputCanvas` is the grayscale surface the renderer draws on. It starts white
// and only ever receives black, so it doubles as a coverage mask.
//
// Circles are rasterized by testing pixel centres against squared distances:
// - Filled: every pixel within the radius.
// - Outline: every pixel inside a band of the stroke width centred on the radius.
//   When the band's inner edge would fall below zero the circle is simply filled.
// Drawing is clipped to the canvas, so centres near an edge are safe.

use image::{GrayImage, Luma};

pub const WHITE: u8 = 255;
pub const BLACK: u8 = 0;

/// How a circle is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    /// A ring of the given width in pixels.
    Outline(u32),
    /// A solid disc.
    Filled,
}

impl Stroke {
    /// The integer stroke convention: values <= 0 (conventionally -1) mean filled.
    pub const FILLED_SENTINEL: i32 = -1;

    pub fn from_width(width: i32) -> Self {
        if width <= 0 {
            Stroke::Filled
        } else {
            Stroke::Outline(width as u32)
        }
    }

    /// Inner and outer radius of the painted band.
    fn band(self, radius: u32) -> (f64, f64) {
        let radius = radius as f64;
        match self {
            Stroke::Filled => (0.0, radius),
            Stroke::Outline(width) => {
                let half = width as f64 / 2.0;
                ((radius - half).max(0.0), radius + half)
            }
        }
    }
}

/// An 8-bit grayscale raster, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputCanvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl OutputCanvas {
    /// A canvas of the given size, all white.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![WHITE; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Number of samples that are not white.
    pub fn ink_count(&self) -> usize {
        self.data.iter().filter(|&&v| v != WHITE).count()
    }

    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|&v| v == WHITE)
    }

    pub fn to_gray_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| Luma([self.get(x, y)]))
    }

    /// Paints a black circle centred on pixel `(center_x, center_y)`.
    pub fn draw_circle(&mut self, center_x: i64, center_y: i64, radius: u32, stroke: Stroke) {
        if self.data.is_empty() {
            return;
        }
        let (inner, outer) = stroke.band(radius);
        let inner_sq = inner * inner;
        let outer_sq = outer * outer;
        let reach = outer.ceil() as i64;

        let x_start = (center_x - reach).max(0);
        let x_end = (center_x + reach).min(self.width as i64 - 1);
        let y_start = (center_y - reach).max(0);
        let y_end = (center_y + reach).min(self.height as i64 - 1);

        let width = self.width as usize;
        for y in y_start..=y_end {
            let dy = (y - center_y) as f64;
            let row = &mut self.data[y as usize * width..(y as usize + 1) * width];
            for x in x_start..=x_end {
                let dx = (x - center_x) as f64;
                let distance_sq = dx * dx + dy * dy;
                if distance_sq <= outer_sq && distance_sq >= inner_sq {
                    row[x as usize] = BLACK;
                }
            }
        }
    }
}
