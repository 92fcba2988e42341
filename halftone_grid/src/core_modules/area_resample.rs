// THEORY:
// Area resampling is spatial pooling: each destination cell stands for a
// rectangle of the source image and takes the mean colour of everything inside
// it. Cells rarely align with pixel borders, so the rectangle is described per
// axis as a run of source indices with fractional coverage weights. A pixel cut
// in half by a cell border contributes half its weight to each side.
//
// The 2D weight of a source pixel is the product of its row and column weights,
// which keeps the filter separable and lets one `AxisSpan` table per axis serve
// every cell. When the destination is larger than the source the same rule
// degrades gracefully to nearest-pixel sampling with blended borders.

use crate::core_modules::pixel::pixel::{self, ComputedChannel, Luminance};
use crate::core_modules::source_image::SourceImage;

/// The averaged colour of one destination cell, kept at full precision.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CellColor {
    pub blue: ComputedChannel,
    pub green: ComputedChannel,
    pub red: ComputedChannel,
}

impl CellColor {
    pub fn luminance(&self) -> Luminance {
        pixel::luminance(self.blue, self.green, self.red)
    }
}

/// The source indices covered by one destination index along a single axis.
#[derive(Debug, Clone, PartialEq)]
struct AxisSpan {
    start: usize,
    /// Normalized coverage of `start`, `start + 1`, ... Sums to 1.
    weights: Vec<f64>,
}

fn axis_spans(source_len: u32, target_len: u32) -> Vec<AxisSpan> {
    let scale = source_len as f64 / target_len as f64;
    (0..target_len)
        .map(|index| {
            let low = index as f64 * scale;
            let high = ((index + 1) as f64 * scale).min(source_len as f64);
            let start = (low.floor() as usize).min(source_len as usize - 1);
            let end = (high.ceil() as usize).clamp(start + 1, source_len as usize);

            let coverage: Vec<f64> = (start..end)
                .map(|s| {
                    let s = s as f64;
                    (high.min(s + 1.0) - low.max(s)).max(0.0)
                })
                .collect();
            let total: f64 = coverage.iter().sum();
            let weights = if total > 0.0 {
                coverage.iter().map(|c| c / total).collect()
            } else {
                vec![1.0 / coverage.len() as f64; coverage.len()]
            };
            AxisSpan { start, weights }
        })
        .collect()
}

fn average_span(image: &SourceImage, rows: &AxisSpan, columns: &AxisSpan) -> CellColor {
    let mut cell = CellColor::default();
    for (dy, row_weight) in rows.weights.iter().enumerate() {
        let row = image.row((rows.start + dy) as u32);
        let pixels = &row[columns.start..columns.start + columns.weights.len()];
        for (pixel, column_weight) in pixels.iter().zip(&columns.weights) {
            let weight = row_weight * column_weight;
            cell.blue += weight * pixel.blue as f64;
            cell.green += weight * pixel.green as f64;
            cell.red += weight * pixel.red as f64;
        }
    }
    cell
}

/// Resizes `image` to `width` x `height` cells by area averaging.
///
/// Returns the cells in row-major order. Both target dimensions must be non-zero.
pub fn resize_area(image: &SourceImage, width: u32, height: u32) -> Vec<CellColor> {
    let columns = axis_spans(image.width(), width);
    let rows = axis_spans(image.height(), height);
    let columns = columns.as_slice();

    rows.iter()
        .flat_map(|row_span| {
            columns
                .iter()
                .map(move |column_span| average_span(image, row_span, column_span))
        })
        .collect()
}
