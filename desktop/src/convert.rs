use image::imageops::FilterType;
use pixgrid_core::grid::{HEIGHT, WIDTH};
use pixgrid_core::threshold::threshold_rgba;

/// Loads an image and resizes it to the grid dimensions. Nearest-neighbor,
/// matching the original tool's canvas with smoothing disabled.
pub fn load_source(path: &str) -> Vec<u8> {
    let image = image::open(path).expect("Failed to open input image");
    image
        .resize_exact(WIDTH as u32, HEIGHT as u32, FilterType::Nearest)
        .into_rgba8()
        .into_raw()
}

/// Thresholds a copy of the source buffer. Returns the cells together with
/// the normalized black/white RGBA buffer for preview output.
pub fn threshold_source(source: &[u8], threshold: u16) -> (Vec<bool>, Vec<u8>) {
    let mut preview = source.to_vec();
    let cells = threshold_rgba(&mut preview, threshold);
    (cells, preview)
}
