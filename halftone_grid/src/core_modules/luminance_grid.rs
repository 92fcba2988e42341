// THEORY:
// The `LuminanceGridBuilder` is the first stage of the transform. It shrinks the
// source image to a fixed number of rows, reduces each cell to one brightness
// value and stretches those values across [0, 1].
//
// Stages, each a flat map over the cell array:
// 1.  **Grid sizing**: the height is the configured `grid_height`; the width keeps
//     the source aspect ratio and never drops below one column.
// 2.  **Area pooling**: `area_resample` averages every source pixel a cell covers.
// 3.  **Luma**: BT.709 weights on the named colour channels.
// 4.  **Contrast stretch**: the darkest cell maps to 0 and the brightest to 1. A
//     flat image has no range to stretch, so its raw luma is clamped into [0, 1]
//     instead: flat black stays 0, anything brighter saturates at 1.
// 5.  **Quantization** (optional): samples snap onto `levels` evenly spaced steps.
//
// The resulting `LuminanceGrid` is immutable and is the only thing the renderer sees.

use crate::config::HalftoneConfig;
use crate::core_modules::area_resample::resize_area;
use crate::core_modules::source_image::SourceImage;
use crate::error::{HalftoneError, Result};
use log::debug;

/// Luma ranges narrower than this (on the 0..255 scale) count as a flat image.
const FLAT_RANGE_EPSILON: f64 = 1e-9;

/// A low-resolution, normalized brightness map of a source image.
#[derive(Debug, Clone, PartialEq)]
pub struct LuminanceGrid {
    width: u32,
    height: u32,
    samples: Vec<f64>,
}

impl LuminanceGrid {
    /// Wraps precomputed samples. Values are clamped into [0, 1].
    pub fn from_samples(width: u32, height: u32, samples: Vec<f64>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(HalftoneError::EmptyImage { width, height });
        }
        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(HalftoneError::BufferMismatch { expected, actual: samples.len() });
        }
        let samples = samples.into_iter().map(|s| s.clamp(0.0, 1.0)).collect();
        Ok(Self { width, height, samples })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f64 {
        self.samples[y as usize * self.width as usize + x as usize]
    }

    /// Every cell as `(x, y, sample)`, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, f64)> + '_ {
        let width = self.width;
        self.samples
            .iter()
            .enumerate()
            .map(move |(i, &sample)| ((i as u32) % width, (i as u32) / width, sample))
    }

    pub fn min(&self) -> f64 {
        self.samples.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.samples.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Number of grid columns that keeps the source aspect ratio at `grid_height` rows.
pub fn grid_width_for(source_width: u32, source_height: u32, grid_height: u32) -> u32 {
    let width = (source_width as f64 * grid_height as f64 / source_height as f64).round();
    (width as u32).max(1)
}

/// Stretches raw luma across [0, 1].
fn normalize(raw: &[f64]) -> Vec<f64> {
    let min = raw.iter().copied().fold(f64::INFINITY, f64::min);
    let max = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range <= FLAT_RANGE_EPSILON {
        debug!("Flat luminance ({min:.3}); keeping raw values");
        return raw.iter().map(|l| l.clamp(0.0, 1.0)).collect();
    }
    raw.iter().map(|l| ((l - min) / range).clamp(0.0, 1.0)).collect()
}

/// Snaps normalized samples onto `levels` steps: 0, 1/(levels-1), ..., 1.
fn quantize(samples: &mut [f64], levels: u32) {
    let levels = levels as f64;
    for sample in samples.iter_mut() {
        *sample = ((*sample * levels).floor() / (levels - 1.0)).min(1.0);
    }
}

/// Builds a `LuminanceGrid` from a `SourceImage`.
#[derive(Debug, Clone)]
pub struct LuminanceGridBuilder {
    grid_height: u32,
    quantization_levels: Option<u32>,
}

impl LuminanceGridBuilder {
    pub fn new(config: &HalftoneConfig) -> Self {
        Self {
            grid_height: config.grid_height.max(1),
            quantization_levels: config.quantization(),
        }
    }

    pub fn grid_height(&self) -> u32 {
        self.grid_height
    }

    pub fn build(&self, image: &SourceImage) -> Result<LuminanceGrid> {
        if image.width() == 0 || image.height() == 0 {
            return Err(HalftoneError::EmptyImage { width: image.width(), height: image.height() });
        }

        let height = self.grid_height;
        let width = grid_width_for(image.width(), image.height(), height);
        debug!(
            "Resampling {}x{} source to {}x{} luminance grid",
            image.width(),
            image.height(),
            width,
            height
        );

        let raw: Vec<f64> = resize_area(image, width, height)
            .iter()
            .map(|cell| cell.luminance())
            .collect();
        let mut samples = normalize(&raw);

        if let Some(levels) = self.quantization_levels {
            quantize(&mut samples, levels);
        }

        Ok(LuminanceGrid { width, height, samples })
    }
}
