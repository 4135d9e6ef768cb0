//! Corner-sampled background removal
//!
//! The first and last pixel of the buffer (top-left and bottom-right
//! corners) are taken as background color estimates. Every visible pixel
//! within tolerance of either estimate becomes fully transparent.

use crate::buffer::PixelBuffer;
use crate::color::{Lab, RgbColor};

/// Default ΔE76 tolerance for background removal.
pub const DEFAULT_BACKGROUND_TOLERANCE: f64 = 30.0;

/// Lab values of the two corner samples, or `None` for an empty buffer.
pub fn background_samples(buffer: &PixelBuffer) -> Option<[Lab; 2]> {
    let first = buffer.pixels().next()?;
    let last = buffer.pixels().next_back()?;
    Some([
        Lab::from(RgbColor::from_pixel(first)),
        Lab::from(RgbColor::from_pixel(last)),
    ])
}

/// Clear alpha on every pixel within `tolerance` of a corner sample.
///
/// Already transparent pixels are skipped, which makes the operation
/// idempotent: RGB bytes never change, so a second pass samples the same
/// corners and finds nothing new to clear.
///
/// # Example
///
/// ```
/// use cielab_ops::{remove_background, PixelBuffer};
///
/// let mut buffer = PixelBuffer::new(
///     3, 1,
///     vec![250, 250, 250, 255, 20, 30, 200, 255, 252, 251, 250, 255],
/// ).unwrap();
/// remove_background(&mut buffer, 10.0);
///
/// assert_eq!(buffer.pixel(0).unwrap()[3], 0);
/// assert_eq!(buffer.pixel(1).unwrap()[3], 255);
/// assert_eq!(buffer.pixel(2).unwrap()[3], 0);
/// ```
pub fn remove_background(buffer: &mut PixelBuffer, tolerance: f64) {
    let Some(samples) = background_samples(buffer) else {
        return;
    };

    for pixel in buffer.pixels_mut() {
        if pixel[3] == 0 {
            continue;
        }
        let lab = Lab::from(RgbColor::from_pixel(pixel));
        if samples.iter().any(|bg| lab.delta_e(*bg) <= tolerance) {
            pixel[3] = 0;
        }
    }
}
