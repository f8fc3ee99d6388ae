//! Command dispatch.
//!
//! A [`Command`] names one operation from the closed command set.
//! [`Engine::apply`] validates the [`CommandArgs`] it needs and runs it,
//! returning either one complete output raster or an [`EngineError`].
//!
//! # Example
//!
//! ```
//! use pixel_kernels::{Command, CommandArgs, Engine, Raster, Rgba};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let engine = Engine::new(None);
//! let source = Raster::filled(1, 1, Rgba::rgb(255, 0, 0)).unwrap();
//! let command: Command = "grayscale".parse().unwrap();
//!
//! let out = engine
//!     .apply(command, &source, &CommandArgs::new(), &mut StdRng::seed_from_u64(0))
//!     .unwrap();
//! assert_eq!(out.get(0, 0), Rgba::rgb(0, 0, 0));
//! ```

mod args;
mod command;
mod engine;

pub use args::{CommandArgs, MAX_COLORS_KEY};
pub use command::Command;
pub use engine::Engine;
