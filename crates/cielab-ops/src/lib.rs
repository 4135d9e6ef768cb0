//! cielab-ops: perceptual color operations on RGBA8 pixel buffers
//!
//! This crate is the numeric core behind tintwork. It converts device RGB
//! to CIELAB, measures color differences with ΔE76 and builds four buffer
//! operations on top:
//!
//! | Operation | Entry point | Output |
//! |-----------|-------------|--------|
//! | Palette extraction | [`extract_palette`] | most frequent colors |
//! | Tolerant recoloring | [`ColorRemapper`] | same buffer, recolored |
//! | Stylized effects | [`apply_effect`] | same buffer, filtered |
//! | Background removal | [`remove_background`] | same buffer, alpha-matted |
//!
//! [`Operation`] ties them together as a closed, validated request type.
//!
//! # Quick Start
//!
//! ```
//! use cielab_ops::{ColorReplacement, Operation, OperationOutput, PixelBuffer, ReplacementRules};
//!
//! let rules: ReplacementRules = [
//!     ColorReplacement::parse("rgb(128,128,128)", Some("#0000ff"), false).unwrap(),
//! ]
//! .into_iter()
//! .collect();
//!
//! let buffer = PixelBuffer::filled(2, 2, [128, 128, 128, 255]).unwrap();
//! let operation = Operation::remap(rules, 15.0).unwrap();
//!
//! let OperationOutput::Buffer(buffer) = operation.apply(buffer) else {
//!     unreachable!()
//! };
//! let px = buffer.pixel(0).unwrap();
//! assert!(px[2] > px[0]); // now bluish, same lightness
//! ```
//!
//! # Color Science
//!
//! ## Why CIELAB
//!
//! Tolerances have to mean the same thing everywhere in the gamut. A
//! difference of 10 in sRGB bytes is barely visible in bright yellows and
//! glaring in dark blues. In CIELAB, Euclidean distance (ΔE76) tracks
//! perceived difference closely enough for "is this the same color?"
//! decisions, so every tolerance in this crate is a ΔE76 threshold.
//!
//! ## Recoloring keeps lightness
//!
//! A matched pixel keeps its own `L` and takes the replacement color's `a`
//! and `b`. Shadows and highlights of the original survive, only hue and
//! chroma move. The flip side: pure black (`L = 0`) and pure white
//! (`L = 100`) have no room for chroma and stay black or white whatever the
//! replacement.
//!
//! ## First match, not best match
//!
//! Rules are tried in declaration order and the first one within tolerance
//! wins, even if a later rule is closer. Callers control precedence by
//! ordering the rules.
//!
//! ## Constants
//!
//! D65 white `(95.047, 100.0, 108.883)`, transfer threshold `0.008856`,
//! linear slope `7.787`, and the 4-digit sRGB matrices. Because the
//! matrices are rounded, a full RGB -> Lab -> RGB round trip is exact to
//! within one unit per channel rather than bit-exact.

pub mod background;
pub mod buffer;
pub mod color;
pub mod effects;
pub mod error;
pub mod extract;
pub mod operation;
pub mod remap;


pub use background::{remove_background, DEFAULT_BACKGROUND_TOLERANCE};
pub use buffer::{BufferError, PixelBuffer, CHANNELS};
pub use color::{delta_e76, Lab, ParseColorError, RgbColor, Xyz};
pub use effects::{apply_effect, EffectKind};
pub use error::ProcessError;
pub use extract::{
    extract_palette, ColorSample, ExtractOptions, DEFAULT_SAMPLE_STRIDE, DEFAULT_TOP_K,
};
pub use operation::{Operation, OperationOutput};
pub use remap::{ColorRemapper, ColorReplacement, ReplacementRules};
