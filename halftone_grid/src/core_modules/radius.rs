// THEORY:
// A halftone dot stands for an amount of ink. Treating the inverted luminance as
// the fraction of a unit area to cover, and solving A = pi * r^2 for r, makes the
// drawn ink grow linearly with darkness. A linear radius would grow the area
// quadratically and crush the shadows.

use std::f64::consts::PI;

/// Radius, in canvas pixels, for an ink coverage fraction in [0, 1].
///
/// Coverage at or below zero (and NaN) yields 0, meaning no circle is drawn.
pub fn intensity_to_radius(coverage: f64, radius_factor: u32) -> u32 {
    if coverage.is_nan() || coverage <= 0.0 {
        return 0;
    }
    ((coverage / PI).sqrt() * radius_factor as f64).floor() as u32
}

/// The radius drawn for full coverage: `floor(radius_factor / sqrt(pi))`.
pub fn max_radius(radius_factor: u32) -> u32 {
    intensity_to_radius(1.0, radius_factor)
}
