//! Error diffusion weight tables.

/// An error diffusion kernel.
///
/// Each entry is `(dx, dy, weight)`: the neighbor at offset `(dx, dy)`
/// receives `error * weight / divisor`, truncated toward zero. Offsets with
/// `dy == 0` must point right of the current pixel so that error only flows
/// to pixels not yet visited in a top-to-bottom, left-to-right scan.
#[derive(Debug, Clone, Copy)]
pub struct DiffusionKernel {
    pub entries: &'static [(i64, i64, i32)],
    pub divisor: i32,
}

impl DiffusionKernel {
    /// Sum of all weights. Equals `divisor` for kernels that propagate the
    /// full error.
    pub fn total_weight(&self) -> i32 {
        self.entries.iter().map(|&(_, _, w)| w).sum()
    }
}

/// Weights used by the `monochrome` command.
///
/// ```text
///         X    8
///    1    4    3
/// ```
///
/// Right 1/2, down-right 3/16, down 1/4, down-left 1/16. The full error is
/// propagated (16/16).
pub const MONOCHROME: DiffusionKernel = DiffusionKernel {
    entries: &[
        (1, 0, 8),  // right
        (1, 1, 3),  // down-right
        (0, 1, 4),  // down
        (-1, 1, 1), // down-left
    ],
    divisor: 16,
};
