use crate::raster::{clamp255, Raster, Rgba};

/// Copy the green channel into red and blue.
///
/// This is not a luminance conversion: a pure red pixel becomes black.
/// Alpha is carried over.
pub fn grayscale(source: &Raster) -> Raster {
    source.map(|px| Rgba::new(px.g, px.g, px.g, px.a))
}

/// Invert every color channel (`255 - c`). Alpha is carried over.
pub fn negate(source: &Raster) -> Raster {
    source.map(|px| {
        Rgba::new(
            clamp255(255 - px.r as i64),
            clamp255(255 - px.g as i64),
            clamp255(255 - px.b as i64),
            px.a,
        )
    })
}
