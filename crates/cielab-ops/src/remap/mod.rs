//! Tolerant color replacement
//!
//! [`ReplacementRules`] is the ordered rule set and [`ColorRemapper`] applies
//! it to a buffer.

mod remapper;
mod rules;

pub use remapper::ColorRemapper;
pub use rules::{ColorReplacement, ReplacementRules};
