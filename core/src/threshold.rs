//! Brightness thresholding of RGBA buffers.

use alloc::vec::Vec;

/// Thresholds an RGBA buffer (4 bytes per pixel) into on/off cells and
/// normalizes the buffer in place to pure black/white with opaque alpha,
/// ready for preview output.
///
/// A pixel is on iff the channel average is strictly below the threshold;
/// an average exactly at the threshold stays off. The comparison is done as
/// `R + G + B < 3 * T` so no rounding is involved. The threshold is not
/// clamped; values above 255 simply turn everything on.
pub fn threshold_rgba(rgba: &mut [u8], threshold: u16) -> Vec<bool> {
    let mut cells = Vec::with_capacity(rgba.len() / 4);
    for px in rgba.chunks_exact_mut(4) {
        let sum = px[0] as u32 + px[1] as u32 + px[2] as u32;
        let on = sum < 3 * threshold as u32;
        let value = if on { 0 } else { 255 };
        px[0] = value;
        px[1] = value;
        px[2] = value;
        px[3] = 255;
        cells.push(on);
    }
    cells
}
