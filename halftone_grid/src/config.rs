// THEORY:
// `HalftoneConfig` carries the five tunables of the transform. It is built once
// (from defaults, a TOML file, or CLI overrides), validated once, and then handed
// by reference to the grid builder and the renderer, which copy out the values
// they need. Nothing downstream mutates it.

use crate::error::{HalftoneError, Result};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_SCALE_FACTOR: u32 = 50;
pub const DEFAULT_RADIUS_FACTOR: u32 = 50;
pub const DEFAULT_GRID_HEIGHT: u32 = 125;
pub const DEFAULT_QUANTIZATION_LEVELS: i32 = 0;
pub const DEFAULT_OUTLINE_WIDTH: u32 = 2;

/// Tunables shared by the luminance grid builder and the circle grid renderer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HalftoneConfig {
    /// Canvas pixels per grid cell, along each axis.
    pub scale_factor: u32,
    /// Multiplier applied to the area-preserving radius.
    pub radius_factor: u32,
    /// Height of the luminance grid in cells. The width follows the source aspect ratio.
    pub grid_height: u32,
    /// Number of discrete luminance levels. Any value <= 1 disables quantization.
    pub quantization_levels: i32,
    /// Stroke width of the outlined render, in canvas pixels.
    pub outline_width: u32,
}

impl Default for HalftoneConfig {
    fn default() -> Self {
        Self {
            scale_factor: DEFAULT_SCALE_FACTOR,
            radius_factor: DEFAULT_RADIUS_FACTOR,
            grid_height: DEFAULT_GRID_HEIGHT,
            quantization_levels: DEFAULT_QUANTIZATION_LEVELS,
            outline_width: DEFAULT_OUTLINE_WIDTH,
        }
    }
}

impl HalftoneConfig {
    /// The active number of quantization levels, if quantization is enabled.
    pub fn quantization(&self) -> Option<u32> {
        (self.quantization_levels > 1).then_some(self.quantization_levels as u32)
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("scale_factor", self.scale_factor),
            ("radius_factor", self.radius_factor),
            ("grid_height", self.grid_height),
            ("outline_width", self.outline_width),
        ];
        if let Some((name, _)) = positive.iter().find(|(_, value)| *value == 0) {
            return Err(HalftoneError::InvalidConfig(format!("{name} must be at least 1")));
        }
        Ok(())
    }

    /// Parses a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: HalftoneConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| HalftoneError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
