//! CIELAB color space under the D65 illuminant
//!
//! Lab separates lightness (`l`) from the two opponent chroma axes (`a`,
//! `b`). Euclidean distance in Lab approximates perceived color difference
//! (see [`super::distance`]), which is what every matching operation in this
//! crate relies on.

use super::rgb::RgbColor;
use super::xyz::{rgb_to_xyz, xyz_to_rgb, Xyz};

/// D65 reference white in the XYZ scale used by this crate.
pub const D65_WHITE: Xyz = Xyz::new(95.047, 100.0, 108.883);

/// Threshold between the cube-root and linear segments of the Lab transfer.
const EPSILON: f64 = 0.008856;
/// Slope of the linear segment.
const KAPPA_SLOPE: f64 = 7.787;
const OFFSET: f64 = 16.0 / 116.0;

/// A color in CIELAB space.
///
/// - `l`: lightness, 0.0 (black) to 100.0 (white)
/// - `a`: green (negative) to red (positive), roughly -128..=127
/// - `b`: blue (negative) to yellow (positive), roughly -128..=127
///
/// Values are not clamped; composites built by mixing components of two
/// colors may fall outside the RGB gamut and are clamped only when
/// converted back to RGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Keep this color's lightness and take chroma/hue (`a`, `b`) from `other`.
    ///
    /// # Example
    /// ```
    /// use cielab_ops::Lab;
    /// let grey = Lab::new(50.0, 0.0, 0.0);
    /// let red = Lab::new(53.2, 80.1, 67.2);
    /// assert_eq!(grey.with_chroma_of(red), Lab::new(50.0, 80.1, 67.2));
    /// ```
    #[inline]
    pub fn with_chroma_of(self, other: Lab) -> Lab {
        Lab::new(self.l, other.a, other.b)
    }

    /// Convert back to 8-bit device RGB (clamped).
    #[inline]
    pub fn to_rgb(self) -> RgbColor {
        xyz_to_rgb(lab_to_xyz(self))
    }
}

/// Convert XYZ to Lab relative to the D65 white.
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let fx = forward(xyz.x / D65_WHITE.x);
    let fy = forward(xyz.y / D65_WHITE.y);
    let fz = forward(xyz.z / D65_WHITE.z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convert Lab back to XYZ, the exact inverse of [`xyz_to_lab`].
pub fn lab_to_xyz(lab: Lab) -> Xyz {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;

    Xyz {
        x: inverse(fx) * D65_WHITE.x,
        y: inverse(fy) * D65_WHITE.y,
        z: inverse(fz) * D65_WHITE.z,
    }
}

#[inline]
fn forward(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA_SLOPE * t + OFFSET
    }
}

#[inline]
fn inverse(f: f64) -> f64 {
    let cube = f * f * f;
    if cube > EPSILON {
        cube
    } else {
        (f - OFFSET) / KAPPA_SLOPE
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        xyz_to_lab(xyz)
    }
}

impl From<Lab> for Xyz {
    fn from(lab: Lab) -> Self {
        lab_to_xyz(lab)
    }
}

impl From<RgbColor> for Lab {
    fn from(rgb: RgbColor) -> Self {
        xyz_to_lab(rgb_to_xyz(rgb))
    }
}
