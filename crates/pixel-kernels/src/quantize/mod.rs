//! Palette reduction by iterative nearest-center clustering.
//!
//! [`quantize`] reduces a raster to at most `max_colors` colors:
//!
//! 1. Count every distinct RGB triple ([`ColorHistogram`]).
//! 2. Start from `min(max_colors, distinct)` random palette colors.
//! 3. Run [`REFINEMENT_ROUNDS`] rounds. Each round assigns every histogram
//!    entry to its L1-nearest palette slot, then moves each slot to the
//!    count-weighted mean of its members. A slot nobody voted for is
//!    re-seeded with a fresh random color.
//! 4. Replace every pixel with its L1-nearest palette color.
//!
//! The random source is a parameter, so a seeded generator gives
//! reproducible output.
//!
//! # Example
//!
//! ```
//! use pixel_kernels::{quantize, Raster, Rgba};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let source = Raster::from_fn(16, 16, |x, y| Rgba::rgb((x * 16) as u8, (y * 16) as u8, 0)).unwrap();
//! let mut rng = StdRng::seed_from_u64(1);
//! let out = quantize(&source, 4, &mut rng).unwrap();
//!
//! let mut distinct: Vec<_> = out.pixels().iter().map(|p| p.to_rgb()).collect();
//! distinct.sort();
//! distinct.dedup();
//! assert!(distinct.len() <= 4);
//! ```

mod histogram;
mod palette;

pub use histogram::{ColorCount, ColorHistogram};
pub use palette::{l1_distance, random_color, Palette};

use rand::Rng;

use crate::error::EngineError;
use crate::raster::{clamp255, Raster, Rgba};

/// Palette size used when the caller does not ask for one.
pub const DEFAULT_MAX_COLORS: usize = 8;

/// Fixed number of assign/update rounds.
pub const REFINEMENT_ROUNDS: usize = 10;

/// Reduce `source` to at most `max_colors` colors.
///
/// Alpha is carried over unchanged. Fails when `max_colors` is zero.
pub fn quantize<R: Rng + ?Sized>(
    source: &Raster,
    max_colors: usize,
    rng: &mut R,
) -> Result<Raster, EngineError> {
    let palette = build_palette(source, max_colors, rng)?;
    apply_palette(source, &palette)
}

/// Compute the reduced palette for `source` without remapping pixels.
pub fn build_palette<R: Rng + ?Sized>(
    source: &Raster,
    max_colors: usize,
    rng: &mut R,
) -> Result<Palette, EngineError> {
    if max_colors == 0 {
        return Err(EngineError::InvalidArgument {
            key: "maxColors",
            value: max_colors.to_string(),
            reason: "must be a positive integer",
        });
    }

    let histogram = ColorHistogram::from_raster(source);
    let entries = histogram.entries();
    let mut palette = Palette::random(max_colors.min(entries.len()), rng);

    for round in 0..REFINEMENT_ROUNDS {
        let assignment = assign(&entries, &palette);
        let reseeded = update(&entries, &assignment, &mut palette, rng);
        tracing::trace!(round, reseeded, "quantization round");
    }

    tracing::debug!(
        distinct = entries.len(),
        palette = palette.len(),
        "palette built"
    );
    Ok(palette)
}

/// Replace every pixel of `source` with its nearest color in `palette`.
pub fn apply_palette(source: &Raster, palette: &Palette) -> Result<Raster, EngineError> {
    if palette.is_empty() {
        return Err(EngineError::InvalidArgument {
            key: "maxColors",
            value: "0".to_string(),
            reason: "palette is empty",
        });
    }

    let mut out = source.clone();
    for y in 0..source.height() {
        for x in 0..source.width() {
            let px = source.get(x, y);
            // non-empty palette always yields an index
            let [r, g, b] = palette.nearest(px.to_rgb()).map_or(px.to_rgb(), |i| palette.get(i));
            out.set(x, y, Rgba::new(r, g, b, px.a));
        }
    }
    Ok(out)
}

/// Palette slot each histogram entry votes for, parallel to `entries`.
fn assign(entries: &[ColorCount], palette: &Palette) -> Vec<usize> {
    entries
        .iter()
        .map(|e| palette.nearest(e.color).unwrap_or(0))
        .collect()
}

/// Move each slot to the count-weighted mean of its voters. Returns how many
/// slots received no votes and were re-seeded.
fn update<R: Rng + ?Sized>(
    entries: &[ColorCount],
    assignment: &[usize],
    palette: &mut Palette,
    rng: &mut R,
) -> usize {
    let mut sums = vec![[0u64; 4]; palette.len()];
    for (entry, &slot) in entries.iter().zip(assignment) {
        let acc = &mut sums[slot];
        acc[0] += entry.color[0] as u64 * entry.count;
        acc[1] += entry.color[1] as u64 * entry.count;
        acc[2] += entry.color[2] as u64 * entry.count;
        acc[3] += entry.count;
    }

    let mut reseeded = 0;
    for (slot, acc) in sums.iter().enumerate() {
        let count = acc[3];
        if count == 0 {
            palette.set(slot, random_color(rng));
            reseeded += 1;
            continue;
        }
        palette.set(
            slot,
            [
                clamp255((acc[0] / count) as i64),
                clamp255((acc[1] / count) as i64),
                clamp255((acc[2] / count) as i64),
            ],
        );
    }
    reseeded
}
