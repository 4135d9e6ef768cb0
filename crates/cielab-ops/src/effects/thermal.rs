//! Thermal-camera false color

/// Map each pixel's mean brightness to a red/blue heat ramp.
///
/// With `avg = (R + G + B) / 3`: `R = 255` if `avg > 128` else `2 * avg`,
/// `G = avg`, `B = 255 - avg`. Alpha is untouched.
pub fn thermal(data: &mut [u8]) {
    for pixel in data.chunks_exact_mut(4) {
        let avg = (pixel[0] as f64 + pixel[1] as f64 + pixel[2] as f64) / 3.0;
        pixel[0] = if avg > 128.0 { 255 } else { to_channel(avg * 2.0) };
        pixel[1] = to_channel(avg);
        pixel[2] = to_channel(255.0 - avg);
    }
}

/// Round to nearest with ties to even, then clamp to a byte.
#[inline]
pub(super) fn to_channel(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_and_white() {
        let mut data = [0, 0, 0, 255, 255, 255, 255, 10];
        thermal(&mut data);
        assert_eq!(data, [0, 0, 255, 255, 255, 255, 0, 10]);
    }

    #[test]
    fn test_threshold() {
        // avg exactly 128 stays on the doubling branch
        let mut data = [128, 128, 128, 255];
        thermal(&mut data);
        assert_eq!(data, [255, 128, 127, 255]);

        let mut data = [100, 100, 100, 255];
        thermal(&mut data);
        assert_eq!(data, [200, 100, 155, 255]);

        let mut data = [129, 129, 129, 255];
        thermal(&mut data);
        assert_eq!(data, [255, 129, 126, 255]);
    }

    #[test]
    fn test_fractional_average_rounds() {
        // avg = 10/3
        let mut data = [10, 0, 0, 255];
        thermal(&mut data);
        assert_eq!(data, [7, 3, 252, 255]);
    }
}
