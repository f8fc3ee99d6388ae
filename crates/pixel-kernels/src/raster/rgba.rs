//! 8-bit RGBA pixel type.

/// One pixel with 8-bit red, green, blue and alpha channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgba {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
    /// Alpha channel (0 = transparent, 255 = opaque)
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque pixel.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create an opaque gray pixel with all color channels set to `v`.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self::rgb(v, v, v)
    }

    /// The color channels as `[r, g, b]`, alpha dropped.
    #[inline]
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Same color with alpha forced to opaque.
    #[inline]
    pub fn opaque(self) -> Self {
        Self { a: 255, ..self }
    }

    /// Brightness weighting used by the histogram margins:
    /// `0.3 R + 0.4 G + 0.3 B`, truncated.
    #[inline]
    pub fn brightness(self) -> u32 {
        (self.r as f64 * 0.3 + self.g as f64 * 0.4 + self.b as f64 * 0.3) as u32
    }
}

impl From<[u8; 4]> for Rgba {
    #[inline]
    fn from(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}

impl From<Rgba> for [u8; 4] {
    #[inline]
    fn from(px: Rgba) -> Self {
        [px.r, px.g, px.b, px.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_is_opaque() {
        assert_eq!(Rgba::rgb(1, 2, 3).a, 255);
        assert_eq!(Rgba::gray(7), Rgba::new(7, 7, 7, 255));
    }

    #[test]
    fn test_opaque_keeps_color() {
        let px = Rgba::new(10, 20, 30, 40).opaque();
        assert_eq!(px, Rgba::new(10, 20, 30, 255));
    }

    #[test]
    fn test_byte_conversions() {
        let px = Rgba::from([1, 2, 3, 4]);
        assert_eq!(px, Rgba::new(1, 2, 3, 4));
        let bytes: [u8; 4] = px.into();
        assert_eq!(bytes, [1, 2, 3, 4]);
    }

    #[test]
    fn test_brightness_weights() {
        assert_eq!(Rgba::WHITE.brightness(), 255);
        assert_eq!(Rgba::BLACK.brightness(), 0);
        // 0.3*100 + 0.4*200 + 0.3*0 = 110
        assert_eq!(Rgba::rgb(100, 200, 0).brightness(), 110);
    }
}
