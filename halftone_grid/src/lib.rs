// THEORY:
// This file is the main entry point for the `halftone_grid` library crate.
// The public face of the crate is `HalftonePipeline` with its `HalftoneConfig`:
// hand it a decoded image and it returns a filled and an outlined circle grid.
//
// The two stages behind it live in `core_modules` and stay public for callers
// that want only one of them:
// - `luminance_grid`: source image -> normalized low-resolution brightness grid.
// - `circle_grid`: brightness grid -> magnified canvas of circles.
//
// File decoding and encoding sit in `core_modules::utils::image_helper` and are
// kept apart from the math.

pub mod config;
pub mod core_modules;
pub mod error;
pub mod pipeline;

pub use crate::config::HalftoneConfig;
pub use crate::core_modules::canvas::{OutputCanvas, Stroke};
pub use crate::core_modules::circle_grid::{CircleGridRenderer, PlacedCircle};
pub use crate::core_modules::luminance_grid::{LuminanceGrid, LuminanceGridBuilder};
pub use crate::core_modules::pixel::pixel::Pixel;
pub use crate::core_modules::radius::intensity_to_radius;
pub use crate::core_modules::source_image::SourceImage;
pub use crate::core_modules::utils::image_helper::image_helper::{load_source_image, save_canvas};
pub use crate::error::{ErrorKind, HalftoneError, Result};
pub use crate::pipeline::{HalftoneOutput, HalftonePipeline};
