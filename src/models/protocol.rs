//! Request/response messages exchanged with a TaskHost.
//!
//! The wire shape is loose (`operation` is a string, `params` is free-form
//! JSON); [`RequestMessage::validate`] turns it into a closed
//! [`Operation`] plus an owned [`PixelBuffer`] before anything runs.

use base64::{engine::general_purpose::STANDARD, Engine};
use cielab_ops::{
    ColorReplacement, ColorSample, EffectKind, Operation, OperationOutput, PixelBuffer,
    ReplacementRules,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::ProtocolError;
use crate::models::AppConfig;

/// RGBA8 pixel buffer as carried in JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EncodedBuffer {
    pub width: u32,
    pub height: u32,
    /// Base64 (standard alphabet) of `width * height * 4` row-major RGBA bytes
    pub data: String,
}

impl EncodedBuffer {
    pub fn encode(buffer: &PixelBuffer) -> Self {
        Self {
            width: buffer.width(),
            height: buffer.height(),
            data: STANDARD.encode(buffer.as_bytes()),
        }
    }

    /// Decode into an owned buffer. The pixel limit is checked before the
    /// payload is decoded.
    pub fn decode(self, max_pixels: u64) -> Result<PixelBuffer, ProtocolError> {
        if u64::from(self.width) * u64::from(self.height) > max_pixels {
            return Err(ProtocolError::TooLarge {
                width: self.width,
                height: self.height,
                max: max_pixels,
            });
        }

        let data = STANDARD.decode(self.data.as_bytes())?;
        Ok(PixelBuffer::new(self.width, self.height, data)?)
    }
}

/// Incoming request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RequestMessage {
    /// One of `extract`, `remap`, `effect`, `removeBackground`
    pub operation: String,

    pub buffer: EncodedBuffer,

    /// Operation-specific parameters
    #[serde(default)]
    #[schema(value_type = Object)]
    pub params: Value,
}

/// A replacement rule as it appears on the wire
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WireRule {
    /// `rgb(r,g,b)`
    pub original: String,

    /// `#rrggbb`; may be omitted for transparent rules
    #[serde(default, alias = "replacement")]
    pub new_color: Option<String>,

    #[serde(default)]
    pub transparent: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RemapParams {
    pub rules: Vec<WireRule>,
    pub tolerance: Option<f64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct EffectParams {
    /// `thermal`, `glitch` or `vintage`
    pub kind: String,
    pub intensity: Option<f64>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct BackgroundParams {
    pub tolerance: Option<f64>,
}

impl RequestMessage {
    /// Check the operation name and its params, then decode the buffer.
    pub fn validate(self, config: &AppConfig) -> Result<(Operation, PixelBuffer), ProtocolError> {
        let operation = match self.operation.as_str() {
            "extract" => Operation::extract(config.extract_options())?,
            "remap" => {
                let params: RemapParams = parse_params("remap", self.params)?;
                let rules = params
                    .rules
                    .iter()
                    .map(|rule| {
                        ColorReplacement::parse(
                            &rule.original,
                            rule.new_color.as_deref(),
                            rule.transparent,
                        )
                    })
                    .collect::<Result<ReplacementRules, _>>()
                    .map_err(cielab_ops::ProcessError::from)?;
                Operation::remap(
                    rules,
                    params.tolerance.unwrap_or(config.defaults.remap_tolerance),
                )?
            }
            "effect" => {
                let params: EffectParams = parse_params("effect", self.params)?;
                let kind: EffectKind = params.kind.parse()?;
                Operation::effect(
                    kind,
                    params.intensity.unwrap_or(config.defaults.effect_intensity),
                )?
            }
            "removeBackground" => {
                let params: BackgroundParams = parse_params("removeBackground", self.params)?;
                Operation::remove_background(
                    params
                        .tolerance
                        .unwrap_or(config.defaults.background_tolerance),
                )?
            }
            other => return Err(ProtocolError::UnknownOperation(other.to_string())),
        };

        let buffer = self.buffer.decode(config.limits.max_pixels)?;
        Ok((operation, buffer))
    }
}

/// `null` params read as an empty object so all-optional param sets can be
/// left out entirely.
fn parse_params<T: DeserializeOwned>(
    operation: &'static str,
    params: Value,
) -> Result<T, ProtocolError> {
    let params = if params.is_null() {
        Value::Object(Default::default())
    } else {
        params
    };

    serde_json::from_value(params).map_err(|e| ProtocolError::InvalidParams {
        operation,
        message: e.to_string(),
    })
}

/// One extracted color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WireColor {
    /// `rgb(r,g,b)`
    pub rgb: String,
    /// `#rrggbb`
    pub hex: String,
    /// Number of sampled pixels with this color
    pub count: usize,
}

impl From<&ColorSample> for WireColor {
    fn from(sample: &ColorSample) -> Self {
        Self {
            rgb: sample.rgb().to_string(),
            hex: sample.hex().to_string(),
            count: sample.count(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Ok,
    Error,
}

/// Exactly one of these is produced per request.
///
/// - `{status: "ok", result}` for buffer operations
/// - `{status: "ok", colors}` for extract
/// - `{status: "error", reason}` on rejection, failure or timeout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResponseMessage {
    pub status: ResponseStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<EncodedBuffer>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<WireColor>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ResponseMessage {
    pub fn ok(output: &OperationOutput) -> Self {
        let (result, colors) = match output {
            OperationOutput::Buffer(buffer) => (Some(EncodedBuffer::encode(buffer)), None),
            OperationOutput::Colors(samples) => {
                (None, Some(samples.iter().map(WireColor::from).collect()))
            }
        };

        Self {
            status: ResponseStatus::Ok,
            result,
            colors,
            reason: None,
        }
    }

    pub fn error(reason: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            result: None,
            colors: None,
            reason: Some(reason.into()),
        }
    }
}
