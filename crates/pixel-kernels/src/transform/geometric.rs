use crate::raster::{Raster, Rgba};

/// Mirror left to right: `out[w-1-x, y] = in[x, y]`. Output is opaque.
pub fn horizontal_flip(source: &Raster) -> Raster {
    let w = source.width();
    let mut out = source.clone();
    for y in 0..source.height() {
        for x in 0..w {
            out.set(w - 1 - x, y, source.get(x, y).opaque());
        }
    }
    out
}

/// Transpose through the anti-diagonal.
///
/// The output is `height x width`, with
/// `out[(h-1)-y, (w-1)-x] = in[x, y]`. Output is opaque.
pub fn rotate(source: &Raster) -> Raster {
    let w = source.width();
    let h = source.height();
    let mut out = Raster::sized(h, w, Rgba::BLACK);
    for y in 0..h {
        for x in 0..w {
            out.set((h - 1) - y, (w - 1) - x, source.get(x, y).opaque());
        }
    }
    out
}
