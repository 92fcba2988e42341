pub mod area_resample;
pub mod canvas;
pub mod circle_grid;
pub mod luminance_grid;
pub mod pixel;
pub mod radius;
pub mod source_image;
pub mod utils;
