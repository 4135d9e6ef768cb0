//! Gamma transfer functions
//!
//! The decode direction uses a 256-entry table generated at compile time by
//! build.rs (8-bit inputs only). The encode direction takes continuous input
//! and evaluates the formula directly.

include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Decode an 8-bit sRGB channel to linear light (0.0..=1.0).
#[inline]
pub fn srgb8_to_linear(value: u8) -> f64 {
    SRGB8_TO_LINEAR[value as usize]
}

/// Encode linear light to a gamma-corrected sRGB value.
///
/// Not clamped: out-of-gamut input yields values outside 0.0..=1.0 and the
/// caller decides how to clamp.
#[inline]
pub fn linear_to_srgb(linear: f64) -> f64 {
    if linear > 0.0031308 {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * linear
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lut_matches_formula() {
        for i in 0..=255u8 {
            let c = i as f64 / 255.0;
            let exact = if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            };
            assert_eq!(srgb8_to_linear(i), exact, "LUT entry {i} differs");
        }
    }

    #[test]
    fn test_lut_endpoints() {
        assert_eq!(srgb8_to_linear(0), 0.0);
        assert!((srgb8_to_linear(255) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_encode_inverts_decode() {
        for i in 0..=255u8 {
            let back = linear_to_srgb(srgb8_to_linear(i)) * 255.0;
            assert!(
                (back - i as f64).abs() < 1e-6,
                "value {i} came back as {back}"
            );
        }
    }
}
