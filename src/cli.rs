//! Helpers behind the one-shot CLI commands.
//!
//! Every command reads a PNG, runs one operation through a TaskHost and
//! either writes the resulting PNG or returns the extracted colors.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use cielab_ops::{ColorReplacement, Operation, OperationOutput, ParseColorError};

use crate::models::{AppConfig, WireColor};
use crate::services::{read_png_limited, write_png, CoreRunner, TaskHost};

/// Parse a `--rule` argument: `rgb(r,g,b)=#rrggbb` or `rgb(r,g,b)=transparent`.
pub fn parse_rule_arg(arg: &str) -> Result<ColorReplacement, ParseColorError> {
    let (original, target) = arg
        .split_once('=')
        .ok_or(ParseColorError::MissingReplacement)?;

    match target.trim() {
        t if t.eq_ignore_ascii_case("transparent") => ColorReplacement::parse(original, None, true),
        hex => ColorReplacement::parse(original, Some(hex), false),
    }
}

async fn process_file(
    config: &AppConfig,
    operation: Operation,
    input: &Path,
) -> anyhow::Result<OperationOutput> {
    let buffer = read_png_limited(input, config.limits.max_pixels)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    tracing::debug!(
        input = %input.display(),
        width = buffer.width(),
        height = buffer.height(),
        operation = operation.name(),
        "Loaded input image"
    );

    let host = TaskHost::new(Arc::new(CoreRunner), config.task_timeout());
    Ok(host.run(operation, buffer).await?)
}

/// Run a buffer operation (remap, effect, removeBackground) from `input` to
/// `output`.
pub async fn run_buffer_command(
    config: &AppConfig,
    operation: Operation,
    input: &Path,
    output: &Path,
) -> anyhow::Result<()> {
    let name = operation.name();
    match process_file(config, operation, input).await? {
        OperationOutput::Buffer(buffer) => {
            write_png(output, &buffer)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            Ok(())
        }
        OperationOutput::Colors(_) => anyhow::bail!("{name} did not produce an image"),
    }
}

/// Extract the dominant colors of `input`, most frequent first.
pub async fn run_extract_command(
    config: &AppConfig,
    input: &Path,
) -> anyhow::Result<Vec<WireColor>> {
    let operation = Operation::extract(config.extract_options())?;
    match process_file(config, operation, input).await? {
        OperationOutput::Colors(samples) => Ok(samples.iter().map(WireColor::from).collect()),
        OperationOutput::Buffer(_) => anyhow::bail!("extract did not produce colors"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cielab_ops::RgbColor;

    #[test]
    fn test_parse_rule_with_hex() {
        let rule = parse_rule_arg("rgb(255, 0, 0)=#00FF00").unwrap();
        assert_eq!(rule.original, RgbColor::new(255, 0, 0));
        assert_eq!(rule.replacement, RgbColor::new(0, 255, 0));
        assert!(!rule.transparent);
    }

    #[test]
    fn test_parse_rule_transparent() {
        let rule = parse_rule_arg("rgb(1,2,3)=transparent").unwrap();
        assert_eq!(rule.original, RgbColor::new(1, 2, 3));
        assert!(rule.transparent);

        assert!(parse_rule_arg("rgb(1,2,3)=Transparent").unwrap().transparent);
    }

    #[test]
    fn test_parse_rule_errors() {
        assert_eq!(
            parse_rule_arg("rgb(1,2,3)"),
            Err(ParseColorError::MissingReplacement)
        );
        assert_eq!(
            parse_rule_arg("rgb(1,2,3)=00ff00"),
            Err(ParseColorError::MissingHash)
        );
        assert!(parse_rule_arg("#000000=#ffffff").is_err());
    }
}
