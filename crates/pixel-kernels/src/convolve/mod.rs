//! N x N kernel convolution.
//!
//! [`convolve`] filters the R, G and B channels of every interior pixel with
//! a [`Kernel`]. Pixels closer than `kernel.radius()` to any edge have no
//! full neighborhood; they are copied from the source unchanged, as is the
//! alpha channel everywhere.
//!
//! # Example
//!
//! ```
//! use pixel_kernels::{convolve, Kernel, Raster, Rgba};
//!
//! let flat = Raster::filled(8, 8, Rgba::rgb(90, 120, 30)).unwrap();
//! let blurred = convolve(&flat, &Kernel::box_blur(5).unwrap());
//!
//! assert_eq!(blurred, flat);
//! ```

mod kernel;

pub use kernel::{Kernel, DEFAULT_SIDE};

use crate::raster::{abs255, Raster, Rgba};

/// Apply `kernel` to every interior pixel of `source`.
///
/// Each channel of the output is `abs255(Σ source_channel * weight)`.
pub fn convolve(source: &Raster, kernel: &Kernel) -> Raster {
    let mut out = source.clone();
    let radius = kernel.radius();
    let side = kernel.side();

    if source.width() <= 2 * radius || source.height() <= 2 * radius {
        return out;
    }

    for y in radius..source.height() - radius {
        for x in radius..source.width() - radius {
            let mut acc = [0.0f64; 3];
            for ky in 0..side {
                for kx in 0..side {
                    let px = source.get(x + kx - radius, y + ky - radius);
                    let w = kernel.weight(kx, ky);
                    acc[0] += px.r as f64 * w;
                    acc[1] += px.g as f64 * w;
                    acc[2] += px.b as f64 * w;
                }
            }
            let alpha = source.get(x, y).a;
            out.set(
                x,
                y,
                Rgba::new(abs255(acc[0]), abs255(acc[1]), abs255(acc[2]), alpha),
            );
        }
    }

    out
}
