//! Image container decoding and PNG encoding.
//!
//! The engine only sees [`Raster`]s; this module is the boundary that turns
//! file bytes into a raster and a result raster back into PNG bytes.

use pixel_kernels::Raster;
use std::io::Cursor;

use crate::error::RenderError;

/// File extensions served as images. Matching is case-sensitive.
pub const IMAGE_EXTENSIONS: [&str; 5] = [".jpeg", ".jpg", ".gif", ".bmp", ".png"];

/// Largest accepted width or height, in pixels.
pub const MAX_DIMENSION: u32 = 8192;

/// Whether `name` ends with one of [`IMAGE_EXTENSIONS`].
pub fn is_image_name(name: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Decode PNG, JPEG, GIF or BMP bytes into an RGBA raster.
///
/// The container format is sniffed from the bytes, not from a file name.
pub fn decode(bytes: &[u8]) -> Result<Raster, RenderError> {
    let img = image::load_from_memory(bytes).map_err(|e| RenderError::Decode(e.to_string()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(RenderError::UnsupportedDimensions { width, height });
    }

    Raster::from_rgba(width as usize, height as usize, rgba.as_raw())
        .map_err(|e| RenderError::Decode(e.to_string()))
}

/// Encode a raster as an 8-bit RGBA PNG.
///
/// The bytes are returned only after the encoder has finished; any failure
/// yields an error and no output.
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>, RenderError> {
    let (width, height) = match (u32::try_from(raster.width()), u32::try_from(raster.height())) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(RenderError::UnsupportedDimensions {
                width: u32::MAX,
                height: u32::MAX,
            })
        }
    };

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&raster.to_rgba_bytes())
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixel_kernels::Rgba;

    fn sample() -> Raster {
        Raster::from_fn(5, 3, |x, y| Rgba::new(x as u8 * 50, y as u8 * 80, 7, 200 + x as u8)).unwrap()
    }

    #[test]
    fn test_encode_produces_png_signature() {
        let bytes = encode_png(&sample()).unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_encode_then_decode_is_lossless() {
        let raster = sample();
        let decoded = decode(&encode_png(&raster).unwrap()).unwrap();
        assert_eq!(decoded, raster);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, RenderError::Decode(_)));
    }

    #[test]
    fn test_decode_truncated_png_fails() {
        let bytes = encode_png(&sample()).unwrap();
        assert!(decode(&bytes[..bytes.len() / 2]).is_err());
    }

    #[test]
    fn test_decode_bmp() {
        let mut buf = Cursor::new(Vec::new());
        image::RgbImage::from_pixel(2, 2, image::Rgb([10, 20, 30]))
            .write_to(&mut buf, image::ImageFormat::Bmp)
            .unwrap();
        let raster = decode(buf.get_ref()).unwrap();
        assert_eq!(raster.width(), 2);
        assert_eq!(raster.get(1, 1), Rgba::rgb(10, 20, 30));
    }

    #[test]
    fn test_is_image_name() {
        assert!(is_image_name("cat.png"));
        assert!(is_image_name("photo.jpeg"));
        assert!(is_image_name("anim.gif"));
        assert!(!is_image_name("index.html"));
        assert!(!is_image_name("CAT.PNG"));
        assert!(!is_image_name("png"));
    }
}
