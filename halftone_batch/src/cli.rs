//! CLI argument parsing with clap.

use clap::Parser;
use halftone_grid::{HalftoneConfig, Result};
use std::path::PathBuf;

/// Render every image in a folder as a grid of filled and outlined circles
#[derive(Parser, Debug)]
#[command(name = "halftone_batch")]
#[command(version, about = "Halftone circle grids for a folder of images", long_about = None)]
pub struct Args {
    /// Folder scanned for .png, .jpg, .jpeg, .bmp and .tiff files
    #[arg(default_value = "examples")]
    pub input_dir: PathBuf,

    /// Where filled renders are written
    #[arg(long, default_value = "filled")]
    pub filled_dir: PathBuf,

    /// Where outlined renders are written
    #[arg(long, default_value = "outline")]
    pub outline_dir: PathBuf,

    /// TOML file with halftone settings; flags below override it
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Canvas pixels per grid cell
    #[arg(long)]
    pub scale_factor: Option<u32>,

    /// Radius multiplier
    #[arg(long)]
    pub radius_factor: Option<u32>,

    /// Luminance grid height in cells
    #[arg(long)]
    pub grid_height: Option<u32>,

    /// Quantization levels (<= 1 disables)
    #[arg(long, allow_negative_numbers = true)]
    pub levels: Option<i32>,

    /// Outline stroke width in pixels
    #[arg(long)]
    pub outline_width: Option<u32>,
}

impl Args {
    /// Config file (or defaults) with command-line overrides applied, validated.
    pub fn resolve_config(&self) -> Result<HalftoneConfig> {
        let mut config = match &self.config {
            Some(path) => HalftoneConfig::load(path)?,
            None => HalftoneConfig::default(),
        };
        if let Some(value) = self.scale_factor {
            config.scale_factor = value;
        }
        if let Some(value) = self.radius_factor {
            config.radius_factor = value;
        }
        if let Some(value) = self.grid_height {
            config.grid_height = value;
        }
        if let Some(value) = self.levels {
            config.quantization_levels = value;
        }
        if let Some(value) = self.outline_width {
            config.outline_width = value;
        }
        config.validate()?;
        Ok(config)
    }
}
