//! Test fixtures: an image directory populated with known rasters.

use pixel_kernels::{Raster, Rgba};
use std::path::Path;

use ichabod::rendering::encode_png;

/// Fixture file names
pub mod images {
    /// 1x1 pure red
    pub const RED: &str = "red.png";

    /// 2x1: (10,20,30) then (40,50,60)
    pub const PAIR: &str = "pair.png";

    /// 16x12 color gradient
    pub const GRADIENT: &str = "gradient.png";

    /// Not an image at all
    pub const BROKEN: &str = "broken.png";

    /// Temp-file name, hidden from the listing
    pub const TEMP: &str = "scratch0.png";

    /// Shadow mask picked up by the default config
    pub const MASK: &str = "SombraSkull.png";
}

pub fn pair_colors() -> (Rgba, Rgba) {
    (Rgba::rgb(10, 20, 30), Rgba::rgb(40, 50, 60))
}

pub fn gradient() -> Raster {
    Raster::from_fn(16, 12, |x, y| {
        Rgba::rgb((x * 16) as u8, (y * 20) as u8, ((x + y) * 8) as u8)
    })
    .unwrap()
}

/// 4x4 mask, opaque on the top-left 2x2 quadrant
pub fn mask() -> Raster {
    Raster::from_fn(4, 4, |x, y| {
        let alpha = if x < 2 && y < 2 { 255 } else { 0 };
        Rgba::new(0, 0, 0, alpha)
    })
    .unwrap()
}

pub fn write_png(dir: &Path, name: &str, raster: &Raster) {
    std::fs::write(dir.join(name), encode_png(raster).unwrap()).unwrap();
}

/// Populate `dir` with every fixture except the mask.
pub fn populate(dir: &Path) {
    let (a, b) = pair_colors();
    write_png(dir, images::RED, &Raster::filled(1, 1, Rgba::rgb(255, 0, 0)).unwrap());
    write_png(dir, images::PAIR, &Raster::from_pixels(2, 1, vec![a, b]).unwrap());
    write_png(dir, images::GRADIENT, &gradient());
    write_png(dir, images::TEMP, &gradient());
    std::fs::write(dir.join(images::BROKEN), b"this is not a png").unwrap();
    std::fs::write(dir.join("notes.txt"), b"not listed").unwrap();
}
