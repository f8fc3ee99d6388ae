//! Owned, row-major RGBA pixel buffer.

use super::rgba::Rgba;
use crate::error::EngineError;

/// A decoded image: `width * height` [`Rgba`] pixels in row-major order.
///
/// Dimensions are always non-zero. Operations never mutate their source
/// raster; they allocate a fresh one for the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl Raster {
    /// Create a raster of transparent black pixels.
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        Self::filled(width, height, Rgba::new(0, 0, 0, 0))
    }

    /// Create a raster with every pixel set to `fill`.
    pub fn filled(width: usize, height: usize, fill: Rgba) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::EmptyRaster { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![fill; width * height],
        })
    }

    /// Infallible constructor for dimensions derived from an existing raster.
    pub(crate) fn sized(width: usize, height: usize, fill: Rgba) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    /// Wrap an existing pixel vector.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgba>) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::EmptyRaster { width, height });
        }
        if pixels.len() != width * height {
            return Err(EngineError::BufferSize {
                expected: width * height,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a raster from interleaved `[R, G, B, A, ...]` bytes.
    pub fn from_rgba(width: usize, height: usize, bytes: &[u8]) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::EmptyRaster { width, height });
        }
        let expected = width * height * 4;
        if bytes.len() != expected {
            return Err(EngineError::BufferSize {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|c| Rgba::new(c[0], c[1], c[2], c[3]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a raster by evaluating `f(x, y)` for every coordinate.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> Rgba,
    ) -> Result<Self, EngineError> {
        let mut raster = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                raster.pixels[y * width + x] = f(x, y);
            }
        }
        Ok(raster)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the raster.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} raster",
            self.width,
            self.height
        );
        self.pixels[y * self.width + x]
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the raster.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, px: Rgba) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} raster",
            self.width,
            self.height
        );
        self.pixels[y * self.width + x] = px;
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Apply `f` to every pixel, producing a raster of the same size.
    pub fn map(&self, f: impl Fn(Rgba) -> Rgba) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&px| f(px)).collect(),
        }
    }

    /// Copy `src` into this raster with its top-left corner at `(dx, dy)`.
    /// Pixels that fall outside this raster are clipped.
    pub fn blit(&mut self, src: &Raster, dx: usize, dy: usize) {
        for y in 0..src.height {
            let ty = dy + y;
            if ty >= self.height {
                break;
            }
            for x in 0..src.width {
                let tx = dx + x;
                if tx >= self.width {
                    break;
                }
                self.pixels[ty * self.width + tx] = src.pixels[y * src.width + x];
            }
        }
    }

    /// Interleaved `[R, G, B, A, ...]` bytes, `width * height * 4` long.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            out.extend_from_slice(&[px.r, px.g, px.b, px.a]);
        }
        out
    }
}
