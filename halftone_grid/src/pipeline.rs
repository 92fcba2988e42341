// THEORY:
// The `pipeline` module is the top-level API for the whole transform. It owns one
// validated configuration and the two stages built from it, and turns a source
// image into both renders in one call: the luminance grid is built once and then
// drawn twice, filled and outlined.

use crate::config::HalftoneConfig;
use crate::core_modules::canvas::{OutputCanvas, Stroke};
use crate::core_modules::circle_grid::CircleGridRenderer;
use crate::core_modules::luminance_grid::{LuminanceGrid, LuminanceGridBuilder};
use crate::core_modules::source_image::SourceImage;
use crate::core_modules::utils::image_helper::image_helper;
use crate::error::Result;
use std::path::Path;

/// Everything produced for one source image.
#[derive(Debug, Clone)]
pub struct HalftoneOutput {
    pub grid: LuminanceGrid,
    pub filled: OutputCanvas,
    pub outline: OutputCanvas,
}

/// The main, top-level struct for the halftone transform.
#[derive(Debug, Clone)]
pub struct HalftonePipeline {
    config: HalftoneConfig,
    builder: LuminanceGridBuilder,
    renderer: CircleGridRenderer,
}

impl HalftonePipeline {
    pub fn new(config: HalftoneConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            builder: LuminanceGridBuilder::new(&config),
            renderer: CircleGridRenderer::new(&config),
            config,
        })
    }

    pub fn config(&self) -> &HalftoneConfig {
        &self.config
    }

    pub fn builder(&self) -> &LuminanceGridBuilder {
        &self.builder
    }

    pub fn renderer(&self) -> &CircleGridRenderer {
        &self.renderer
    }

    pub fn process(&self, image: &SourceImage) -> Result<HalftoneOutput> {
        // Stage 1: Luminance grid
        let grid = self.builder.build(image)?;

        // Stage 2: Circle rasterization, once per stroke
        let filled = self.renderer.render(&grid, Stroke::Filled)?;
        let outline = self
            .renderer
            .render(&grid, Stroke::Outline(self.config.outline_width))?;

        Ok(HalftoneOutput { grid, filled, outline })
    }

    pub fn process_file(&self, path: &Path) -> Result<HalftoneOutput> {
        let image = image_helper::load_source_image(path)?;
        self.process(&image)
    }
}
