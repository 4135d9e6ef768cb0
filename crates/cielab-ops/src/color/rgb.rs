//! 8-bit device RGB color and its canonical string forms

use std::fmt;

use super::error::ParseColorError;

/// A device RGB color with 8-bit channels.
///
/// Two canonical string forms are used on the wire:
/// - `rgb(r,g,b)`: decimal, no leading zeros, no spaces
/// - `#rrggbb`: six lower-case hex digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Read the RGB channels of one RGBA8 pixel, ignoring alpha.
    #[inline]
    pub fn from_pixel(pixel: &[u8]) -> Self {
        Self::new(pixel[0], pixel[1], pixel[2])
    }

    /// Parse a color of the form `rgb(r,g,b)`.
    ///
    /// Whitespace around each component is tolerated; each component must be
    /// a plain decimal integer in 0..=255 (no sign, no fraction).
    ///
    /// # Example
    /// ```
    /// use cielab_ops::RgbColor;
    /// let c = RgbColor::from_rgb_function("rgb(255, 0,16)").unwrap();
    /// assert_eq!(c, RgbColor::new(255, 0, 16));
    /// ```
    pub fn from_rgb_function(s: &str) -> Result<Self, ParseColorError> {
        let inner = s
            .trim()
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or(ParseColorError::InvalidRgbFunction)?;

        let mut components = [0u8; 3];
        let mut parts = inner.split(',');
        for slot in components.iter_mut() {
            let part = parts.next().ok_or(ParseColorError::InvalidRgbFunction)?;
            *slot = parse_component(part)?;
        }
        if parts.next().is_some() {
            return Err(ParseColorError::InvalidRgbFunction);
        }

        Ok(Self::new(components[0], components[1], components[2]))
    }

    /// Parse a color of the form `#rrggbb` (case-insensitive).
    ///
    /// # Example
    /// ```
    /// use cielab_ops::RgbColor;
    /// let c = RgbColor::from_hex("#FF8000").unwrap();
    /// assert_eq!(c, RgbColor::new(255, 128, 0));
    /// ```
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let digits = s
            .trim()
            .strip_prefix('#')
            .ok_or(ParseColorError::MissingHash)?;

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidHexDigit(bad));
        }
        if digits.len() != 6 {
            return Err(ParseColorError::InvalidLength);
        }

        let bytes = digits.as_bytes();
        let pair = |i: usize| (hex_value(bytes[i]) << 4) | hex_value(bytes[i + 1]);
        Ok(Self::new(pair(0), pair(2), pair(4)))
    }

    /// Canonical `rgb(r,g,b)` form.
    pub fn to_rgb_string(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// Canonical `#rrggbb` form (lower-case).
    pub fn to_hex_string(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

fn parse_component(part: &str) -> Result<u8, ParseColorError> {
    let digits = part.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseColorError::InvalidComponent(digits.to_string()));
    }
    digits
        .parse::<u8>()
        .map_err(|_| ParseColorError::InvalidComponent(digits.to_string()))
}

// Input is pre-validated as an ASCII hex digit.
fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}
