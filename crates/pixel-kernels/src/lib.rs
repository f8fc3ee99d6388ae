#![allow(clippy::needless_range_loop, clippy::module_inception)]

//! pixel-kernels: raster transforms behind the ichabod image server
//!
//! The crate works on decoded [`Raster`]s only. Decoding and encoding image
//! containers is the caller's job.
//!
//! # Quick Start
//!
//! The [`Engine`] is the primary entry point. It dispatches one of the nine
//! [`Command`]s against a source raster:
//!
//! ```
//! use pixel_kernels::{CommandArgs, Engine, Raster, Rgba};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let engine = Engine::new(None);
//! let source = Raster::from_fn(2, 1, |x, _| Rgba::rgb(x as u8 * 40, 20, 30)).unwrap();
//! let args = CommandArgs::new().with("maxColors", "2");
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let flipped = engine.run("horizontalflip", &source, &args, &mut rng).unwrap();
//! assert_eq!(flipped.get(0, 0), source.get(1, 0));
//! ```
//!
//! # Commands
//!
//! | Name             | Operation                                        |
//! |------------------|--------------------------------------------------|
//! | `edges`          | 5x5 box blur, see [`convolve()`]                 |
//! | `histograms`     | blur plus brightness bars, see [`visualize()`]   |
//! | `opaqueshadow`   | darken under a mask, see [`opaque_shadow()`]     |
//! | `reduceColor`    | palette reduction, see [`quantize()`]            |
//! | `grayscale`      | green copied into red and blue                   |
//! | `monochrome`     | error diffusion to black and white, see [`dither()`] |
//! | `negateImage`    | `255 - c` per color channel                      |
//! | `horizontalflip` | mirror left to right                             |
//! | `rotate`         | transpose through the anti-diagonal              |
//!
//! # Randomness
//!
//! Only `reduceColor` draws random numbers. The generator is passed into
//! every call, so a seeded [`rand::rngs::StdRng`] gives reproducible output
//! and concurrent calls never share generator state.

pub mod command;
pub mod convolve;
pub mod dither;
pub mod error;
pub mod histogram;
pub mod quantize;
pub mod raster;
pub mod transform;


pub use command::{Command, CommandArgs, Engine, MAX_COLORS_KEY};
pub use convolve::{convolve, Kernel};
pub use dither::dither;
pub use error::EngineError;
pub use histogram::{visualize, MARGIN};
pub use quantize::{apply_palette, build_palette, quantize, Palette, DEFAULT_MAX_COLORS};
pub use raster::{Raster, Rgba};
pub use transform::{
    grayscale, horizontal_flip, negate, opaque_shadow, rotate, ShadowMask,
};
