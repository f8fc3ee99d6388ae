//! Error type for the transform engine.
//!
//! Every failure an operation can report is a variant of [`EngineError`].
//! A missing shadow mask is not an error: that case is recovered
//! inside [`opaque_shadow`](crate::transform::opaque_shadow).

use thiserror::Error;

/// Failures surfaced by the engine and its dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The command name is not part of the closed command set.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// An argument was present but could not be used.
    #[error("invalid argument {key}={value:?}: {reason}")]
    InvalidArgument {
        key: &'static str,
        value: String,
        reason: &'static str,
    },

    /// A raster with zero width or height was requested.
    #[error("raster dimensions must be non-zero (got {width}x{height})")]
    EmptyRaster { width: usize, height: usize },

    /// A pixel buffer did not match the declared dimensions.
    #[error("pixel buffer has {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}
