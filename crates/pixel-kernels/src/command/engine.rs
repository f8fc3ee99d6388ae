use std::sync::Arc;

use rand::Rng;

use super::{Command, CommandArgs};
use crate::convolve::{convolve, Kernel, DEFAULT_SIDE};
use crate::dither::dither;
use crate::error::EngineError;
use crate::histogram::visualize;
use crate::quantize::quantize;
use crate::raster::Raster;
use crate::transform::{grayscale, horizontal_flip, negate, opaque_shadow, rotate, ShadowMask};

/// Runs commands against rasters.
///
/// Holds the shared read-only resources commands need: currently the
/// optional shadow mask. An `Engine` has no mutable state and can be shared
/// across threads; randomness is supplied per call.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    shadow_mask: Option<Arc<ShadowMask>>,
}

impl Engine {
    pub fn new(shadow_mask: Option<Arc<ShadowMask>>) -> Self {
        Self { shadow_mask }
    }

    pub fn shadow_mask(&self) -> Option<&ShadowMask> {
        self.shadow_mask.as_deref()
    }

    /// Parse `name` and run it. See [`Engine::apply`].
    pub fn run<R: Rng + ?Sized>(
        &self,
        name: &str,
        source: &Raster,
        args: &CommandArgs,
        rng: &mut R,
    ) -> Result<Raster, EngineError> {
        let command: Command = name.parse()?;
        self.apply(command, source, args, rng)
    }

    /// Run `command` on `source`.
    ///
    /// `source` is never modified. On success the returned raster is the
    /// complete result.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        command: Command,
        source: &Raster,
        args: &CommandArgs,
        rng: &mut R,
    ) -> Result<Raster, EngineError> {
        tracing::debug!(
            %command,
            width = source.width(),
            height = source.height(),
            "applying command"
        );

        let out = match command {
            Command::Grayscale => grayscale(source),
            Command::Monochrome => dither(source),
            Command::Edges => convolve(source, &Kernel::box_blur(DEFAULT_SIDE)?),
            Command::ReduceColor => quantize(source, args.max_colors()?, rng)?,
            Command::Histograms => visualize(source)?,
            Command::NegateImage => negate(source),
            Command::HorizontalFlip => horizontal_flip(source),
            Command::Rotate => rotate(source),
            Command::OpaqueShadow => opaque_shadow(source, self.shadow_mask()),
        };
        Ok(out)
    }
}
