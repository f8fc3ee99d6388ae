//! Command processing service.
//!
//! Glues the image store, the codec and the transform engine together. The
//! engine work runs on the blocking thread pool.

use pixel_kernels::{Command, CommandArgs, Engine, ShadowMask};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use std::sync::Arc;

use crate::error::ApiError;
use crate::rendering::{decode, encode_png};
use crate::services::ImageStore;

/// Runs commands against stored images and returns PNG bytes
pub struct ProcessorService {
    images: Arc<dyn ImageStore>,
    engine: Arc<Engine>,
    seed: Option<u64>,
}

impl ProcessorService {
    pub fn new(images: Arc<dyn ImageStore>, engine: Engine, seed: Option<u64>) -> Self {
        Self {
            images,
            engine: Arc::new(engine),
            seed,
        }
    }

    /// Run `command_name` on the stored image `image_name`.
    ///
    /// The command is validated before the image is read, so an unknown
    /// command never touches storage.
    pub async fn process(
        &self,
        command_name: &str,
        image_name: &str,
        args: CommandArgs,
    ) -> Result<Vec<u8>, ApiError> {
        let command: Command = command_name.parse()?;
        let bytes = self.images.read(image_name).await?;

        tracing::info!(
            command = %command,
            image = %image_name,
            size_bytes = bytes.len(),
            "Processing image"
        );

        let engine = self.engine.clone();
        let seed = self.seed;
        let png = tokio::task::spawn_blocking(move || {
            process_bytes(&engine, command, &bytes, &args, seed)
        })
        .await
        .map_err(|e| ApiError::Internal(format!("Task error: {e}")))??;

        tracing::info!(size_bytes = png.len(), "Image processed successfully");
        Ok(png)
    }
}

/// Decode `bytes`, run `command` and encode the result as PNG.
///
/// A fresh generator is built per call: seeded from `seed` when given,
/// otherwise from OS entropy.
pub fn process_bytes(
    engine: &Engine,
    command: Command,
    bytes: &[u8],
    args: &CommandArgs,
    seed: Option<u64>,
) -> Result<Vec<u8>, ApiError> {
    let source = decode(bytes)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let output = engine.apply(command, &source, args, &mut rng)?;
    Ok(encode_png(&output)?)
}

/// Load the shadow mask from `path`.
///
/// A missing or undecodable mask is logged and reported as `None`; the
/// `opaqueshadow` command then returns its input unchanged.
pub fn load_shadow_mask(path: &Path) -> Option<ShadowMask> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(path = %path.display(), %e, "Shadow mask not available");
            return None;
        }
    };

    match decode(&bytes) {
        Ok(raster) => {
            tracing::info!(
                path = %path.display(),
                width = raster.width(),
                height = raster.height(),
                "Loaded shadow mask"
            );
            Some(ShadowMask::new(raster))
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), %e, "Failed to decode shadow mask");
            None
        }
    }
}
