//! Raster types and channel clamping
//!
//! Every operation in the crate reads a [`Raster`] and allocates a new one
//! for its output. Pixels are stored row-major as [`Rgba`] values with
//! 8-bit channels.
//!
//! # Example
//!
//! ```
//! use pixel_kernels::{Raster, Rgba};
//!
//! let mut raster = Raster::filled(2, 1, Rgba::rgb(10, 20, 30)).unwrap();
//! raster.set(1, 0, Rgba::rgb(40, 50, 60));
//!
//! assert_eq!(raster.get(0, 0), Rgba::rgb(10, 20, 30));
//! assert_eq!(raster.get(1, 0).g, 50);
//! ```

mod clamp;
mod raster;
mod rgba;

pub use clamp::{abs255, clamp255, clamp_unit};
pub use raster::Raster;
pub use rgba::Rgba;
