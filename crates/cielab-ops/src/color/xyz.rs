//! CIE XYZ tristimulus values and the device RGB <-> XYZ conversion
//!
//! XYZ is scaled so that the D65 reference white has Y = 100.

use super::lut::{linear_to_srgb, srgb8_to_linear};
use super::rgb::RgbColor;

/// sRGB (linear, D65) to XYZ matrix, rows produce X, Y, Z.
pub(crate) const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

/// XYZ to linear sRGB matrix, the inverse of [`RGB_TO_XYZ`] to 4 digits.
pub(crate) const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.2040, 1.0570],
];

/// A color in CIE 1931 XYZ space (Y of reference white = 100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Convert 8-bit device RGB to XYZ.
///
/// Each channel is gamma-decoded to linear light, scaled by 100 and run
/// through the sRGB matrix.
pub fn rgb_to_xyz(rgb: RgbColor) -> Xyz {
    let r = srgb8_to_linear(rgb.r) * 100.0;
    let g = srgb8_to_linear(rgb.g) * 100.0;
    let b = srgb8_to_linear(rgb.b) * 100.0;
    let [mx, my, mz] = RGB_TO_XYZ;

    Xyz {
        x: r * mx[0] + g * mx[1] + b * mx[2],
        y: r * my[0] + g * my[1] + b * my[2],
        z: r * mz[0] + g * mz[1] + b * mz[2],
    }
}

/// Convert XYZ back to 8-bit device RGB.
///
/// Out-of-gamut results are clamped per channel to 0..=255 after rounding.
pub fn xyz_to_rgb(xyz: Xyz) -> RgbColor {
    let x = xyz.x / 100.0;
    let y = xyz.y / 100.0;
    let z = xyz.z / 100.0;
    let [mr, mg, mb] = XYZ_TO_RGB;

    let r = x * mr[0] + y * mr[1] + z * mr[2];
    let g = x * mg[0] + y * mg[1] + z * mg[2];
    let b = x * mb[0] + y * mb[1] + z * mb[2];

    RgbColor::new(encode_channel(r), encode_channel(g), encode_channel(b))
}

#[inline]
fn encode_channel(linear: f64) -> u8 {
    (linear_to_srgb(linear) * 255.0).round().clamp(0.0, 255.0) as u8
}

impl From<RgbColor> for Xyz {
    fn from(rgb: RgbColor) -> Self {
        rgb_to_xyz(rgb)
    }
}

impl From<Xyz> for RgbColor {
    fn from(xyz: Xyz) -> Self {
        xyz_to_rgb(xyz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Matrix3;

    #[test]
    fn test_white_maps_to_d65() {
        let white = rgb_to_xyz(RgbColor::new(255, 255, 255));
        assert!((white.x - 95.05).abs() < 0.01, "X was {}", white.x);
        assert!((white.y - 100.0).abs() < 0.01, "Y was {}", white.y);
        assert!((white.z - 108.9).abs() < 0.01, "Z was {}", white.z);
    }

    #[test]
    fn test_black_maps_to_origin() {
        assert_eq!(rgb_to_xyz(RgbColor::new(0, 0, 0)), Xyz::new(0.0, 0.0, 0.0));
        assert_eq!(xyz_to_rgb(Xyz::new(0.0, 0.0, 0.0)), RgbColor::new(0, 0, 0));
    }

    #[test]
    fn test_matrices_are_inverse() {
        let flat = |m: [[f64; 3]; 3]| {
            Matrix3::new(
                m[0][0], m[0][1], m[0][2], m[1][0], m[1][1], m[1][2], m[2][0], m[2][1], m[2][2],
            )
        };
        let product = flat(XYZ_TO_RGB) * flat(RGB_TO_XYZ);
        let identity = Matrix3::<f64>::identity();

        for i in 0..3 {
            for j in 0..3 {
                assert!(
                    (product[(i, j)] - identity[(i, j)]).abs() < 1e-3,
                    "product[{i},{j}] = {}",
                    product[(i, j)]
                );
            }
        }
    }

    #[test]
    fn test_rgb_xyz_round_trip() {
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(5) {
                for b in (0..=255u8).step_by(5) {
                    let original = RgbColor::new(r, g, b);
                    let back = xyz_to_rgb(rgb_to_xyz(original));
                    for (o, n) in [(r, back.r), (g, back.g), (b, back.b)] {
                        assert!(
                            (o as i32 - n as i32).abs() <= 1,
                            "{original} came back as {back}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_out_of_gamut_is_clamped() {
        let rgb = xyz_to_rgb(Xyz::new(200.0, 200.0, 200.0));
        assert_eq!(rgb, RgbColor::new(255, 255, 255));

        let rgb = xyz_to_rgb(Xyz::new(-10.0, -10.0, -10.0));
        assert_eq!(rgb, RgbColor::new(0, 0, 0));
    }
}
