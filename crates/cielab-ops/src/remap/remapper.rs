//! Tolerance-based recoloring in CIELAB

use crate::buffer::PixelBuffer;
use crate::color::{Lab, RgbColor};

use super::rules::ReplacementRules;

#[derive(Debug, Clone, Copy)]
struct CompiledRule {
    original: Lab,
    replacement: Lab,
    transparent: bool,
}

/// Applies an ordered rule set to pixels.
///
/// Rule colors are converted to Lab once at construction. For each pixel
/// the rules are scanned in declaration order and the first rule with
/// `ΔE76 <= tolerance` wins:
///
/// - transparent rule: alpha becomes 0, RGB bytes are left as they are
/// - otherwise: the pixel keeps its own lightness and takes the
///   replacement's `a`/`b`, so shading and highlights survive the recolor
///
/// Pixels matching no rule are untouched.
///
/// # Example
///
/// ```
/// use cielab_ops::{ColorRemapper, ColorReplacement, PixelBuffer, ReplacementRules, RgbColor};
///
/// let rules: ReplacementRules = [ColorReplacement::transparent(RgbColor::new(0, 0, 0))]
///     .into_iter()
///     .collect();
/// let remapper = ColorRemapper::new(&rules, 5.0);
///
/// let mut buffer = PixelBuffer::filled(2, 2, [0, 0, 0, 255]).unwrap();
/// remapper.apply(&mut buffer);
/// assert!(buffer.pixels().all(|px| px[3] == 0));
/// ```
#[derive(Debug, Clone)]
pub struct ColorRemapper {
    rules: Vec<CompiledRule>,
    tolerance: f64,
}

impl ColorRemapper {
    pub fn new(rules: &ReplacementRules, tolerance: f64) -> Self {
        let rules = rules
            .iter()
            .map(|rule| CompiledRule {
                original: Lab::from(rule.original),
                replacement: Lab::from(rule.replacement),
                transparent: rule.transparent,
            })
            .collect();

        Self { rules, tolerance }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Index of the first rule within tolerance of `lab`.
    pub fn matching_rule(&self, lab: Lab) -> Option<usize> {
        self.rules
            .iter()
            .position(|rule| lab.delta_e(rule.original) <= self.tolerance)
    }

    /// Recolor a single RGBA8 pixel in place.
    pub fn remap_pixel(&self, pixel: &mut [u8]) {
        let lab = Lab::from(RgbColor::from_pixel(pixel));
        let Some(index) = self.matching_rule(lab) else {
            return;
        };

        let rule = &self.rules[index];
        if rule.transparent {
            pixel[3] = 0;
        } else {
            let recolored = lab.with_chroma_of(rule.replacement).to_rgb();
            pixel[0] = recolored.r;
            pixel[1] = recolored.g;
            pixel[2] = recolored.b;
        }
    }

    /// Recolor every pixel of `buffer` in place.
    pub fn apply(&self, buffer: &mut PixelBuffer) {
        if self.rules.is_empty() {
            return;
        }
        for pixel in buffer.pixels_mut() {
            self.remap_pixel(pixel);
        }
    }
}
