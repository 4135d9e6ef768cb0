//! Stylized pixel filters
//!
//! All three filters work in place on raw RGBA8 bytes and leave alpha
//! untouched. `thermal` and `vintage` are pure per-pixel maps; `glitch`
//! exchanges bytes between pixels at most `shift` positions apart and is
//! random, so its results are only reproducible with a seeded RNG.

mod glitch;
mod thermal;
mod vintage;

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::buffer::PixelBuffer;
use crate::error::ProcessError;

pub use glitch::{glitch, glitch_shift};
pub use thermal::thermal;
pub use vintage::vintage;

/// Which stylized filter to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    Thermal,
    Glitch,
    Vintage,
}

impl EffectKind {
    pub const ALL: [EffectKind; 3] = [EffectKind::Thermal, EffectKind::Glitch, EffectKind::Vintage];

    /// Wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            EffectKind::Thermal => "thermal",
            EffectKind::Glitch => "glitch",
            EffectKind::Vintage => "vintage",
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffectKind {
    type Err = ProcessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EffectKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ProcessError::UnknownEffect(s.to_string()))
    }
}

/// Run `kind` over the buffer in place.
///
/// `intensity` drives `glitch` only; `thermal` and `vintage` are fixed
/// transforms.
pub fn apply_effect<R: Rng + ?Sized>(
    buffer: &mut PixelBuffer,
    kind: EffectKind,
    intensity: f64,
    rng: &mut R,
) {
    let data = buffer.as_bytes_mut();
    match kind {
        EffectKind::Thermal => thermal(data),
        EffectKind::Glitch => glitch(data, intensity, rng),
        EffectKind::Vintage => vintage(data),
    }
}
