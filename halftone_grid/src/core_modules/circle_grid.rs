// THEORY:
// The `CircleGridRenderer` is the second stage of the transform. It blows every
// luminance cell up into a `scale_factor` x `scale_factor` tile and puts one black
// circle in the middle of it. Dark cells get big circles, bright cells small ones,
// and a cell at full brightness gets none.
//
// Rendering is split into a pure placement map (cell -> optional circle) and a
// paint pass over the placements. The renderer holds no state between calls, so
// the filled and outlined renders of one grid are independent.
//
// Canvas dimensions are `grid * scale_factor` in `u32`. A grid that would
// overflow is rejected before anything is allocated.

use crate::config::HalftoneConfig;
use crate::core_modules::canvas::{OutputCanvas, Stroke};
use crate::core_modules::luminance_grid::LuminanceGrid;
use crate::core_modules::radius::intensity_to_radius;
use crate::error::{HalftoneError, Result};
use log::info;

/// One circle positioned on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedCircle {
    pub center_x: i64,
    pub center_y: i64,
    pub radius: u32,
}

/// Rasterizes a `LuminanceGrid` into a magnified grid of circles.
#[derive(Debug, Clone)]
pub struct CircleGridRenderer {
    scale_factor: u32,
    radius_factor: u32,
}

impl CircleGridRenderer {
    pub fn new(config: &HalftoneConfig) -> Self {
        Self {
            scale_factor: config.scale_factor,
            radius_factor: config.radius_factor,
        }
    }

    /// Output size for `grid`: every cell becomes `scale_factor` pixels square.
    pub fn canvas_size(&self, grid: &LuminanceGrid) -> Result<(u32, u32)> {
        let too_large = || HalftoneError::CanvasTooLarge {
            grid_width: grid.width(),
            grid_height: grid.height(),
            scale_factor: self.scale_factor,
        };
        let width = grid.width().checked_mul(self.scale_factor).ok_or_else(too_large)?;
        let height = grid.height().checked_mul(self.scale_factor).ok_or_else(too_large)?;
        Ok((width, height))
    }

    /// The circle for cell `(x, y)` with normalized luminance `sample`, if any.
    pub fn place(&self, x: u32, y: u32, sample: f64) -> Option<PlacedCircle> {
        let radius = intensity_to_radius(1.0 - sample, self.radius_factor);
        if radius == 0 {
            return None;
        }
        let scale = self.scale_factor as f64;
        Some(PlacedCircle {
            center_x: ((x as f64 + 0.5) * scale) as i64,
            center_y: ((y as f64 + 0.5) * scale) as i64,
            radius,
        })
    }

    /// Every circle of `grid`, row by row.
    pub fn placements(&self, grid: &LuminanceGrid) -> Vec<PlacedCircle> {
        grid.cells()
            .filter_map(|(x, y, sample)| self.place(x, y, sample))
            .collect()
    }

    pub fn render(&self, grid: &LuminanceGrid, stroke: Stroke) -> Result<OutputCanvas> {
        let (width, height) = self.canvas_size(grid)?;
        let mut canvas = OutputCanvas::new(width, height);

        let circles = self.placements(grid);
        for circle in &circles {
            canvas.draw_circle(circle.center_x, circle.center_y, circle.radius, stroke);
        }

        info!(
            "Circle grid: {}x{} total circles: {} drawn: {} ({:?})",
            grid.width(),
            grid.height(),
            grid.cell_count(),
            circles.len(),
            stroke
        );
        Ok(canvas)
    }
}
