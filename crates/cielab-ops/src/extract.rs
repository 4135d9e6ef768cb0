//! Dominant color extraction
//!
//! Builds an exact-RGB histogram over a strided sample of the buffer and
//! returns the most frequent colors first. Alpha is ignored, so a fully
//! transparent pixel still counts toward its RGB bucket.

use std::collections::HashMap;

use crate::buffer::PixelBuffer;
use crate::color::RgbColor;

/// Default number of colors returned by extraction.
pub const DEFAULT_TOP_K: usize = 50;

/// Default sampling stride in pixels (every 4th pixel is counted).
pub const DEFAULT_SAMPLE_STRIDE: usize = 4;

/// Configuration for [`extract_palette`].
///
/// # Example
///
/// ```
/// use cielab_ops::ExtractOptions;
///
/// let options = ExtractOptions::new().top_k(100).sample_stride(1);
/// assert_eq!(options.top_k, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Maximum number of colors to return.
    ///
    /// Default: 50
    pub top_k: usize,

    /// Count one pixel out of every `sample_stride`, starting at pixel 0.
    /// A stride of 1 counts every pixel. Larger strides trade accuracy for
    /// speed on big images.
    ///
    /// Default: 4
    pub sample_stride: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            sample_stride: DEFAULT_SAMPLE_STRIDE,
        }
    }
}

impl ExtractOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    #[inline]
    pub fn sample_stride(mut self, stride: usize) -> Self {
        self.sample_stride = stride;
        self
    }
}

/// One extracted color with its canonical string forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSample {
    color: RgbColor,
    rgb: String,
    hex: String,
    count: usize,
}

impl ColorSample {
    fn new(color: RgbColor, count: usize) -> Self {
        Self {
            color,
            rgb: color.to_rgb_string(),
            hex: color.to_hex_string(),
            count,
        }
    }

    pub fn color(&self) -> RgbColor {
        self.color
    }

    /// `rgb(r,g,b)`
    pub fn rgb(&self) -> &str {
        &self.rgb
    }

    /// `#rrggbb`, lower-case
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Number of sampled pixels that had this color.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Return up to `options.top_k` colors, most frequent first.
///
/// Colors with equal counts keep the order in which they were first
/// encountered (row-major scan).
pub fn extract_palette(buffer: &PixelBuffer, options: &ExtractOptions) -> Vec<ColorSample> {
    let stride = options.sample_stride.max(1);

    let mut slots: HashMap<RgbColor, usize> = HashMap::new();
    let mut histogram: Vec<(RgbColor, usize)> = Vec::new();

    for pixel in buffer.pixels().step_by(stride) {
        let color = RgbColor::from_pixel(pixel);
        match slots.get(&color) {
            Some(&slot) => histogram[slot].1 += 1,
            None => {
                slots.insert(color, histogram.len());
                histogram.push((color, 1));
            }
        }
    }

    // sort_by is stable, so ties stay in encounter order
    histogram.sort_by(|a, b| b.1.cmp(&a.1));
    histogram.truncate(options.top_k);

    histogram
        .into_iter()
        .map(|(color, count)| ColorSample::new(color, count))
        .collect()
}
