//! Per-pixel and geometric transforms.
//!
//! - [`grayscale`] / [`negate`]: per-pixel channel rewrites.
//! - [`horizontal_flip`] / [`rotate`]: pixel remapping; output alpha is
//!   opaque.
//! - [`opaque_shadow`]: darken the pixels covered by a [`ShadowMask`].

mod geometric;
mod photometric;
mod shadow;

pub use geometric::{horizontal_flip, rotate};
pub use photometric::{grayscale, negate};
pub use shadow::{opaque_shadow, ShadowMask, DARKEN_FACTOR, MASK_ALPHA_THRESHOLD};
