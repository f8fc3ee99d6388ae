//! Square convolution kernels.
//!
//! A [`Kernel`] is an immutable `side x side` matrix of weights with an odd
//! side length, so every kernel has a well-defined center cell.

use crate::error::EngineError;

/// Side length used by the `edges` and `histograms` commands.
pub const DEFAULT_SIDE: usize = 5;

/// An odd-sized square matrix of convolution weights (row-major).
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    side: usize,
    weights: Vec<f64>,
}

impl Kernel {
    /// Build a kernel from row-major weights.
    ///
    /// `weights.len()` must equal `side * side` and `side` must be odd.
    pub fn from_weights(side: usize, weights: Vec<f64>) -> Result<Self, EngineError> {
        if side % 2 == 0 {
            return Err(EngineError::InvalidArgument {
                key: "kernel",
                value: side.to_string(),
                reason: "kernel side must be odd",
            });
        }
        if weights.len() != side * side {
            return Err(EngineError::BufferSize {
                expected: side * side,
                actual: weights.len(),
            });
        }
        Ok(Self { side, weights })
    }

    /// Box blur: every weight is `1 / side²`, so the weights sum to one.
    pub fn box_blur(side: usize) -> Result<Self, EngineError> {
        let weight = 1.0 / (side * side) as f64;
        Self::from_weights(side, vec![weight; side * side])
    }

    /// Identity: a single `1.0` at the center.
    pub fn identity(side: usize) -> Result<Self, EngineError> {
        let mut weights = vec![0.0; side * side];
        let center = side / 2;
        if let Some(w) = weights.get_mut(center * side + center) {
            *w = 1.0;
        }
        Self::from_weights(side, weights)
    }

    /// 3x3 sharpen: identity plus a tenth of the Laplacian.
    ///
    /// ```text
    ///   -0.1  -0.1  -0.1
    ///   -0.1   1.8  -0.1
    ///   -0.1  -0.1  -0.1
    /// ```
    pub fn sharpen() -> Self {
        let mut weights = vec![-0.1; 9];
        weights[4] = 1.8;
        Self { side: 3, weights }
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Distance from the center cell to the kernel edge.
    #[inline]
    pub fn radius(&self) -> usize {
        self.side / 2
    }

    /// Weight at column `kx`, row `ky`.
    #[inline]
    pub fn weight(&self, kx: usize, ky: usize) -> f64 {
        self.weights[ky * self.side + kx]
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}
