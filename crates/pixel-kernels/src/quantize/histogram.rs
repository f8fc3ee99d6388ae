//! Distinct-color counting.

use std::collections::HashMap;

use crate::raster::Raster;

/// One distinct color and the number of pixels that carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCount {
    pub color: [u8; 3],
    pub count: u64,
}

/// Occurrence count of every distinct RGB triple in a raster.
///
/// Alpha is ignored: two pixels that differ only in alpha share a bucket.
#[derive(Debug, Clone, Default)]
pub struct ColorHistogram {
    counts: HashMap<[u8; 3], u64>,
}

impl ColorHistogram {
    pub fn from_raster(raster: &Raster) -> Self {
        let mut counts: HashMap<[u8; 3], u64> = HashMap::new();
        for px in raster.pixels() {
            *counts.entry(px.to_rgb()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of distinct colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count for `color`, zero when absent.
    pub fn count(&self, color: [u8; 3]) -> u64 {
        self.counts.get(&color).copied().unwrap_or(0)
    }

    /// Entries ordered by descending count, ties broken by ascending color.
    ///
    /// The order is fixed so that clustering is reproducible for a given
    /// random seed.
    pub fn entries(&self) -> Vec<ColorCount> {
        let mut entries: Vec<ColorCount> = self
            .counts
            .iter()
            .map(|(&color, &count)| ColorCount { color, count })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then(a.color.cmp(&b.color)));
        entries
    }
}
