//! Perceptual color difference (CIE76)

use super::lab::Lab;

/// CIE76 color difference: Euclidean distance in Lab.
///
/// A ΔE of about 2.3 is the usual "just noticeable difference". This is the
/// only similarity metric used by the crate; tolerances everywhere are
/// expressed in ΔE76 units.
#[inline]
pub fn delta_e76(lab1: Lab, lab2: Lab) -> f64 {
    let dl = lab1.l - lab2.l;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    (dl * dl + da * da + db * db).sqrt()
}

impl Lab {
    /// CIE76 difference to `other`, see [`delta_e76`].
    #[inline]
    pub fn delta_e(self, other: Lab) -> f64 {
        delta_e76(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::RgbColor;

    #[test]
    fn test_reflexive() {
        for lab in [
            Lab::new(0.0, 0.0, 0.0),
            Lab::new(100.0, 0.0, 0.0),
            Lab::new(53.2, 80.1, 67.2),
            Lab::new(32.3, 79.2, -107.9),
        ] {
            assert_eq!(delta_e76(lab, lab), 0.0);
        }
    }

    #[test]
    fn test_symmetric() {
        let a = Lab::from(RgbColor::new(10, 200, 30));
        let b = Lab::from(RgbColor::new(240, 12, 99));
        assert_eq!(delta_e76(a, b), delta_e76(b, a));
    }

    #[test]
    fn test_euclidean() {
        let a = Lab::new(50.0, 0.0, 0.0);
        let b = Lab::new(53.0, 4.0, 0.0);
        assert!((a.delta_e(b) - 5.0).abs() < 1e-12);

        let black = Lab::from(RgbColor::new(0, 0, 0));
        let white = Lab::from(RgbColor::new(255, 255, 255));
        assert!((black.delta_e(white) - 100.0).abs() < 0.1);
    }

    #[test]
    fn test_nonzero_for_distinct_colors() {
        let a = Lab::from(RgbColor::new(100, 100, 100));
        let b = Lab::from(RgbColor::new(100, 100, 101));
        assert!(a.delta_e(b) > 0.0);
    }
}
