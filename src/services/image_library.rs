//! Image files available for processing.

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};

use crate::error::ApiError;
use crate::rendering::is_image_name;

/// Path prefixes that belong to commands; files starting with them are never
/// served so they cannot mask a command.
pub const RESERVED_PREFIXES: [&str; 3] = ["process", "getFileList", "getCommandList"];

/// Trait for image storage
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Names of the images that can be processed, sorted
    async fn list(&self) -> Result<Vec<String>, ApiError>;

    /// Raw bytes of a named file
    async fn read(&self, name: &str) -> Result<Vec<u8>, ApiError>;
}

/// Directory-backed image storage
#[derive(Debug, Clone)]
pub struct ImageLibrary {
    root: PathBuf,
}

impl ImageLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether `name` may appear in the image listing.
    ///
    /// Names containing `0.` are generated temp files and are skipped.
    pub fn is_listed(name: &str) -> bool {
        is_image_name(name) && !name.contains("0.")
    }

    /// Map `name` to a path inside the root.
    ///
    /// Rejects empty and absolute names, any `..` or root component, and
    /// names starting with a reserved command prefix. Existence is not
    /// checked here.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, ApiError> {
        let not_found = || ApiError::ImageNotFound(name.to_string());

        if name.is_empty() || RESERVED_PREFIXES.iter().any(|p| name.starts_with(p)) {
            return Err(not_found());
        }

        let relative = Path::new(name);
        let only_normal = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !only_normal {
            tracing::warn!(name = %name, "Rejected image path outside the library");
            return Err(not_found());
        }

        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl ImageStore for ImageLibrary {
    async fn list(&self) -> Result<Vec<String>, ApiError> {
        let mut entries = tokio::fs::read_dir(&self.root)
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to read image directory: {e}")))?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to read image directory: {e}")))?
        {
            let is_file = entry.file_type().await.map(|t| t.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if Self::is_listed(name) {
                    names.push(name.to_string());
                }
            }
        }

        names.sort();
        tracing::debug!(count = names.len(), root = %self.root.display(), "Listed images");
        Ok(names)
    }

    async fn read(&self, name: &str) -> Result<Vec<u8>, ApiError> {
        let path = self.resolve(name)?;
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => {}
            _ => return Err(ApiError::ImageNotFound(name.to_string())),
        }

        tokio::fs::read(&path).await.map_err(|e| {
            tracing::warn!(path = %path.display(), %e, "Failed to read image");
            ApiError::ImageNotFound(name.to_string())
        })
    }
}
