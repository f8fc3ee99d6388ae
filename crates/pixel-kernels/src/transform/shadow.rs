//! Masked darkening ("opaque shadow").
//!
//! A [`ShadowMask`] is a side image whose sufficiently opaque pixels mark
//! the region to darken. The mask is anchored at the top-left corner of the
//! source. It is loaded once by the caller and shared by reference.

use crate::raster::{clamp255, clamp_unit, Raster, Rgba};

/// Mask pixels with alpha strictly above this value cast a shadow.
pub const MASK_ALPHA_THRESHOLD: u8 = 20;

/// Channel multiplier applied to shadowed pixels.
pub const DARKEN_FACTOR: f64 = 0.7;

/// A decoded mask image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowMask {
    raster: Raster,
}

impl ShadowMask {
    pub fn new(raster: Raster) -> Self {
        Self { raster }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.raster.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.raster.height()
    }

    /// Whether the mask fits inside a `width x height` raster.
    pub fn fits(&self, width: usize, height: usize) -> bool {
        self.width() <= width && self.height() <= height
    }

    /// Whether `(x, y)` lies inside the mask and is opaque enough to darken.
    #[inline]
    pub fn covers(&self, x: usize, y: usize) -> bool {
        x < self.width()
            && y < self.height()
            && self.raster.get(x, y).a > MASK_ALPHA_THRESHOLD
    }
}

/// Scale the color channels by `factor`, truncating. Alpha is kept.
#[inline]
pub fn darken(px: Rgba, factor: f64) -> Rgba {
    let factor = clamp_unit(factor);
    let scale = |c: u8| clamp255((c as f64 * factor) as i64);
    Rgba::new(scale(px.r), scale(px.g), scale(px.b), px.a)
}

/// Darken the pixels of `source` covered by `mask`.
///
/// When `mask` is `None` or larger than the source in either dimension the
/// source is returned unchanged.
pub fn opaque_shadow(source: &Raster, mask: Option<&ShadowMask>) -> Raster {
    let Some(mask) = mask else {
        tracing::debug!("no shadow mask loaded, returning source unchanged");
        return source.clone();
    };
    if !mask.fits(source.width(), source.height()) {
        tracing::debug!(
            mask_width = mask.width(),
            mask_height = mask.height(),
            width = source.width(),
            height = source.height(),
            "shadow mask larger than source, returning source unchanged"
        );
        return source.clone();
    }

    let mut out = source.clone();
    for y in 0..mask.height() {
        for x in 0..mask.width() {
            if mask.covers(x, y) {
                out.set(x, y, darken(source.get(x, y), DARKEN_FACTOR));
            }
        }
    }
    out
}
