use crate::assets::AssetLoader;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default listen address, the port the image UI expects.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5001";

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the images to process and serve
    #[serde(default = "default_image_dir")]
    pub image_dir: PathBuf,

    /// Mask image for `opaqueshadow` (relative paths resolve against image_dir)
    #[serde(default = "default_shadow_mask")]
    pub shadow_mask: PathBuf,

    /// Fixed RNG seed for reproducible `reduceColor` output
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_image_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_shadow_mask() -> PathBuf {
    PathBuf::from("SombraSkull.png")
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str::<Option<Self>>(&content) {
                Ok(config) => {
                    let config = config.unwrap_or_default();
                    tracing::info!(
                        image_dir = %config.image_dir.display(),
                        shadow_mask = %config.shadow_mask.display(),
                        seeded = config.seed.is_some(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Apply `IMAGE_DIR`, `SHADOW_MASK` and `ICHABOD_SEED` overrides from the
    /// process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup("IMAGE_DIR") {
            self.image_dir = PathBuf::from(dir);
        }
        if let Some(mask) = lookup("SHADOW_MASK") {
            self.shadow_mask = PathBuf::from(mask);
        }
        if let Some(seed) = lookup("ICHABOD_SEED") {
            match seed.parse() {
                Ok(seed) => self.seed = Some(seed),
                Err(e) => tracing::warn!(value = %seed, %e, "Ignoring invalid ICHABOD_SEED"),
            }
        }
        self
    }

    /// Shadow mask path, resolved against `image_dir` when relative
    pub fn shadow_mask_path(&self) -> PathBuf {
        resolve_against(&self.image_dir, &self.shadow_mask)
    }
}

fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            image_dir: default_image_dir(),
            shadow_mask: default_shadow_mask(),
            seed: None,
        }
    }
}
