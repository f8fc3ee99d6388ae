//! Black-and-white error diffusion.
//!
//! [`dither`] reduces a raster to pure black and white. The red channel is
//! the brightness proxy: green and blue are ignored. Pixels are visited
//! top-to-bottom, left-to-right; each one is thresholded after adding the
//! error pushed onto it by earlier pixels, and its own rounding error is
//! spread over the unvisited neighbors listed in [`MONOCHROME`].
//!
//! # Example
//!
//! ```
//! use pixel_kernels::{dither, Raster, Rgba};
//!
//! let source = Raster::filled(4, 4, Rgba::rgb(200, 0, 0)).unwrap();
//! let out = dither(&source);
//!
//! assert_eq!(out.get(0, 0), Rgba::WHITE);
//! assert!(out.pixels().iter().all(|p| p.r == p.g && p.g == p.b));
//! ```

mod kernel;

pub use kernel::{DiffusionKernel, MONOCHROME};

use crate::raster::{Raster, Rgba};

/// Proxy values strictly above this become white.
pub const THRESHOLD: i32 = 128;

/// Signed per-pixel error accumulated during one diffusion pass.
///
/// Created zeroed for each call and dropped when the call returns.
#[derive(Debug)]
pub struct ErrorGrid {
    cells: Vec<i32>,
    width: usize,
    height: usize,
}

impl ErrorGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![0; width * height],
            width,
            height,
        }
    }

    /// Accumulated error at `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> i32 {
        self.cells[y * self.width + x]
    }

    /// Add `amount` to the cell at `(x, y)`.
    ///
    /// Returns `false` and changes nothing when the coordinate is outside
    /// the grid.
    #[inline]
    pub fn add(&mut self, x: i64, y: i64, amount: i32) -> bool {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return false;
        }
        self.cells[y as usize * self.width + x as usize] += amount;
        true
    }

    /// Spread `error` from `(x, y)` over the kernel's neighbors.
    pub fn diffuse(&mut self, x: usize, y: usize, error: i32, kernel: &DiffusionKernel) {
        for &(dx, dy, weight) in kernel.entries {
            self.add(x as i64 + dx, y as i64 + dy, error * weight / kernel.divisor);
        }
    }
}

/// Dither `source` to black and white.
///
/// Output pixels are gray (`r == g == b`), either 0 or 255; alpha is
/// carried over from the source.
pub fn dither(source: &Raster) -> Raster {
    let width = source.width();
    let height = source.height();
    let mut out = source.clone();
    let mut errors = ErrorGrid::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let px = source.get(x, y);
            let proxy = px.r as i32 + errors.get(x, y);
            let level = if proxy > THRESHOLD { 255 } else { 0 };
            errors.diffuse(x, y, proxy - level, &MONOCHROME);

            let v = level as u8;
            out.set(x, y, Rgba::new(v, v, v, px.a));
        }
    }

    tracing::trace!(width, height, "monochrome dither complete");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_grid_drops_out_of_bounds() {
        let mut grid = ErrorGrid::new(2, 2);
        assert!(!grid.add(-1, 0, 5));
        assert!(!grid.add(2, 0, 5));
        assert!(!grid.add(0, 2, 5));
        assert!(grid.add(1, 1, 5));
        assert_eq!(grid.get(1, 1), 5);
        assert_eq!(grid.get(0, 0), 0);
    }

    #[test]
    fn test_diffuse_shares() {
        let mut grid = ErrorGrid::new(3, 2);
        grid.diffuse(1, 0, -55, &MONOCHROME);
        assert_eq!(grid.get(2, 0), -27); // -55 / 2
        assert_eq!(grid.get(2, 1), -10); // 3 * -55 / 16
        assert_eq!(grid.get(1, 1), -13); // -55 / 4
        assert_eq!(grid.get(0, 1), -3); // -55 / 16
    }

    #[test]
    fn test_first_pixel_and_propagated_error() {
        // (0,0): 200 > 128 -> white, error -55, right neighbor gets -27
        let source = Raster::filled(2, 1, Rgba::rgb(200, 10, 10)).unwrap();
        let out = dither(&source);
        assert_eq!(out.get(0, 0), Rgba::WHITE);
        // (1,0): 200 - 27 = 173 > 128 -> white
        assert_eq!(out.get(1, 0), Rgba::WHITE);
    }

    #[test]
    fn test_threshold_boundary() {
        let at = dither(&Raster::filled(1, 1, Rgba::rgb(128, 255, 255)).unwrap());
        assert_eq!(at.get(0, 0), Rgba::BLACK);
        let above = dither(&Raster::filled(1, 1, Rgba::rgb(129, 0, 0)).unwrap());
        assert_eq!(above.get(0, 0), Rgba::WHITE);
    }

    #[test]
    fn test_only_red_channel_used() {
        // Bright green and blue but no red: all black
        let source = Raster::filled(3, 3, Rgba::rgb(0, 255, 255)).unwrap();
        let out = dither(&source);
        assert!(out.pixels().iter().all(|&p| p == Rgba::BLACK));
    }

    #[test]
    fn test_mid_gray_mixes() {
        let source = Raster::filled(8, 8, Rgba::gray(128)).unwrap();
        let out = dither(&source);
        let white = out.pixels().iter().filter(|&&p| p == Rgba::WHITE).count();
        assert!(white > 16 && white < 48, "white count {white}");
    }

    #[test]
    fn test_alpha_carried_over() {
        let source = Raster::filled(2, 2, Rgba::new(255, 0, 0, 80)).unwrap();
        let out = dither(&source);
        assert!(out.pixels().iter().all(|p| p.a == 80));
    }
}
