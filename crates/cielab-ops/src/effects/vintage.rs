//! Warm faded-print tint

use super::thermal::to_channel;

/// Fixed per-channel affine tint: `R' = 0.9R + 30`, `G' = 0.7G + 10`,
/// `B' = 0.5B`. Alpha is untouched.
pub fn vintage(data: &mut [u8]) {
    for pixel in data.chunks_exact_mut(4) {
        pixel[0] = to_channel(0.9 * pixel[0] as f64 + 30.0);
        pixel[1] = to_channel(0.7 * pixel[1] as f64 + 10.0);
        pixel[2] = to_channel(0.5 * pixel[2] as f64);
    }
}
