//! Color replacement rules

use crate::color::{ParseColorError, RgbColor};

/// Replace pixels near `original` with `replacement`'s hue, or make them
/// transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorReplacement {
    pub original: RgbColor,
    /// Ignored when `transparent` is set.
    pub replacement: RgbColor,
    pub transparent: bool,
}

impl ColorReplacement {
    pub fn new(original: RgbColor, replacement: RgbColor) -> Self {
        Self {
            original,
            replacement,
            transparent: false,
        }
    }

    /// A rule that clears alpha on matching pixels.
    pub fn transparent(original: RgbColor) -> Self {
        Self {
            original,
            replacement: original,
            transparent: true,
        }
    }

    /// Build a rule from wire strings: `original` as `rgb(r,g,b)`,
    /// `replacement` as `#rrggbb`.
    ///
    /// `replacement` may be `None` only for transparent rules.
    ///
    /// # Example
    /// ```
    /// use cielab_ops::{ColorReplacement, RgbColor};
    ///
    /// let rule = ColorReplacement::parse("rgb(0,0,0)", Some("#ffffff"), false).unwrap();
    /// assert_eq!(rule.replacement, RgbColor::new(255, 255, 255));
    ///
    /// assert!(ColorReplacement::parse("0,0,0", Some("#ffffff"), false).is_err());
    /// ```
    pub fn parse(
        original: &str,
        replacement: Option<&str>,
        transparent: bool,
    ) -> Result<Self, ParseColorError> {
        let original = RgbColor::from_rgb_function(original)?;
        match (replacement, transparent) {
            (Some(hex), transparent) => Ok(Self {
                original,
                replacement: RgbColor::from_hex(hex)?,
                transparent,
            }),
            (None, true) => Ok(Self::transparent(original)),
            (None, false) => Err(ParseColorError::MissingReplacement),
        }
    }
}

/// An ordered rule set. Order decides which rule a pixel takes when several
/// are within tolerance: the earliest one, not the closest one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementRules {
    rules: Vec<ColorReplacement>,
}

impl ReplacementRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule. Returns `false` and keeps the existing rule if one
    /// with the same original color is already present.
    pub fn push(&mut self, rule: ColorReplacement) -> bool {
        if self.rules.iter().any(|r| r.original == rule.original) {
            return false;
        }
        self.rules.push(rule);
        true
    }

    /// Remove the rule for `original`, if any.
    pub fn remove(&mut self, original: RgbColor) -> Option<ColorReplacement> {
        let index = self.rules.iter().position(|r| r.original == original)?;
        Some(self.rules.remove(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorReplacement> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<ColorReplacement> for ReplacementRules {
    fn from_iter<I: IntoIterator<Item = ColorReplacement>>(iter: I) -> Self {
        let mut rules = Self::new();
        for rule in iter {
            rules.push(rule);
        }
        rules
    }
}

impl<'a> IntoIterator for &'a ReplacementRules {
    type Item = &'a ColorReplacement;
    type IntoIter = std::slice::Iter<'a, ColorReplacement>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
