//! The closed set of operations and their dispatch

use rand::Rng;

use crate::background::remove_background;
use crate::buffer::PixelBuffer;
use crate::effects::{apply_effect, EffectKind};
use crate::error::ProcessError;
use crate::extract::{extract_palette, ColorSample, ExtractOptions};
use crate::remap::{ColorRemapper, ReplacementRules};

/// One processing request. Build it with the validating constructors
/// ([`Operation::extract`], [`Operation::remap`], ...) so numeric parameters
/// are known to be finite and non-negative before any pixel is read.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Extract(ExtractOptions),
    Remap {
        rules: ReplacementRules,
        tolerance: f64,
    },
    Effect {
        kind: EffectKind,
        intensity: f64,
    },
    RemoveBackground {
        tolerance: f64,
    },
}

/// What an operation hands back: the same buffer, mutated in place, or a
/// color list derived from it.
#[derive(Debug)]
pub enum OperationOutput {
    Buffer(PixelBuffer),
    Colors(Vec<ColorSample>),
}

impl Operation {
    pub fn extract(options: ExtractOptions) -> Result<Self, ProcessError> {
        if options.sample_stride == 0 {
            return Err(ProcessError::InvalidParameter {
                name: "sample_stride",
                value: 0.0,
            });
        }
        Ok(Operation::Extract(options))
    }

    pub fn remap(rules: ReplacementRules, tolerance: f64) -> Result<Self, ProcessError> {
        Ok(Operation::Remap {
            rules,
            tolerance: check_non_negative("tolerance", tolerance)?,
        })
    }

    pub fn effect(kind: EffectKind, intensity: f64) -> Result<Self, ProcessError> {
        Ok(Operation::Effect {
            kind,
            intensity: check_non_negative("intensity", intensity)?,
        })
    }

    pub fn remove_background(tolerance: f64) -> Result<Self, ProcessError> {
        Ok(Operation::RemoveBackground {
            tolerance: check_non_negative("tolerance", tolerance)?,
        })
    }

    /// Wire name of the operation.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Extract(_) => "extract",
            Operation::Remap { .. } => "remap",
            Operation::Effect { .. } => "effect",
            Operation::RemoveBackground { .. } => "removeBackground",
        }
    }

    /// Run the operation, consuming the buffer.
    pub fn apply(self, buffer: PixelBuffer) -> OperationOutput {
        self.apply_with_rng(buffer, &mut rand::thread_rng())
    }

    /// Run the operation with a caller-supplied RNG (only `glitch` draws
    /// from it).
    pub fn apply_with_rng<R: Rng + ?Sized>(
        self,
        mut buffer: PixelBuffer,
        rng: &mut R,
    ) -> OperationOutput {
        match self {
            Operation::Extract(options) => {
                OperationOutput::Colors(extract_palette(&buffer, &options))
            }
            Operation::Remap { rules, tolerance } => {
                ColorRemapper::new(&rules, tolerance).apply(&mut buffer);
                OperationOutput::Buffer(buffer)
            }
            Operation::Effect { kind, intensity } => {
                apply_effect(&mut buffer, kind, intensity, rng);
                OperationOutput::Buffer(buffer)
            }
            Operation::RemoveBackground { tolerance } => {
                remove_background(&mut buffer, tolerance);
                OperationOutput::Buffer(buffer)
            }
        }
    }
}

fn check_non_negative(name: &'static str, value: f64) -> Result<f64, ProcessError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ProcessError::InvalidParameter { name, value })
    }
}
