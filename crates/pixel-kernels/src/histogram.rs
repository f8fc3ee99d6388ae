//! Brightness histogram margins.
//!
//! [`visualize`] box-blurs the source and places it on a black canvas with
//! a [`MARGIN`]-pixel border on every side. The left border carries one
//! white bar per image row and the top border one white bar per image
//! column; each bar's length is the mean brightness of its row or column
//! scaled to the margin width.
//!
//! ```text
//!  +-----+----------------+-----+
//!  |     | ||| |||||  ||| |     |
//!  +-----+----------------+-----+
//!  |===  |                |     |
//!  |==== |    blurred     |     |
//!  |==   |     source     |     |
//!  +-----+----------------+-----+
//!  |     |                |     |
//!  +-----+----------------+-----+
//! ```

use crate::convolve::{convolve, Kernel, DEFAULT_SIDE};
use crate::error::EngineError;
use crate::raster::{Raster, Rgba};

/// Border width in pixels.
pub const MARGIN: usize = 20;

/// Render the blurred source with row and column brightness bars.
///
/// The output is `(width + 2 * MARGIN) x (height + 2 * MARGIN)`.
pub fn visualize(source: &Raster) -> Result<Raster, EngineError> {
    let filtered = convolve(source, &Kernel::box_blur(DEFAULT_SIDE)?);
    let width = filtered.width();
    let height = filtered.height();

    let mut canvas = Raster::sized(width + 2 * MARGIN, height + 2 * MARGIN, Rgba::BLACK);
    canvas.blit(&filtered, MARGIN, MARGIN);

    for y in 0..height {
        let sum: u64 = (0..width).map(|x| filtered.get(x, y).brightness() as u64).sum();
        let len = bar_length(sum, width);
        for x in 0..len {
            canvas.set(x, MARGIN + y, Rgba::WHITE);
        }
    }

    for x in 0..width {
        let sum: u64 = (0..height).map(|y| filtered.get(x, y).brightness() as u64).sum();
        let len = bar_length(sum, height);
        for y in 0..len {
            canvas.set(MARGIN + x, y, Rgba::WHITE);
        }
    }

    Ok(canvas)
}

/// `sum / (count * 255)` scaled to the margin, truncated.
fn bar_length(sum: u64, count: usize) -> usize {
    let fraction = sum as f64 / (count as f64 * 255.0);
    ((fraction * MARGIN as f64) as usize).min(MARGIN)
}
