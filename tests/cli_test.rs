//! File-based command tests: PNG in, PNG or colors out.

use cielab_ops::{EffectKind, Operation, PixelBuffer, ReplacementRules};
use pretty_assertions::assert_eq;
use tintwork::cli::{parse_rule_arg, run_buffer_command, run_extract_command};
use tintwork::models::AppConfig;
use tintwork::services::{read_png, write_png};

#[tokio::test]
async fn test_remove_background_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");

    let data = [
        [250u8, 250, 250, 255],
        [20, 30, 200, 255],
        [252, 251, 250, 255],
    ]
    .concat();
    write_png(&input, &PixelBuffer::new(3, 1, data).unwrap()).unwrap();

    let operation = Operation::remove_background(10.0).unwrap();
    run_buffer_command(&AppConfig::default(), operation, &input, &output)
        .await
        .unwrap();

    let result = read_png(&output).unwrap();
    assert_eq!(
        result.as_bytes(),
        [[250u8, 250, 250, 0], [20, 30, 200, 255], [252, 251, 250, 0]].concat()
    );
}

#[tokio::test]
async fn test_remap_with_cli_rules() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_png(&input, &PixelBuffer::filled(2, 2, [0, 0, 0, 255]).unwrap()).unwrap();

    let rules: ReplacementRules = [parse_rule_arg("rgb(0,0,0)=transparent").unwrap()]
        .into_iter()
        .collect();
    let operation = Operation::remap(rules, 5.0).unwrap();
    run_buffer_command(&AppConfig::default(), operation, &input, &output)
        .await
        .unwrap();

    assert!(read_png(&output).unwrap().pixels().all(|px| px[3] == 0));
}

#[tokio::test]
async fn test_effect_keeps_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_png(&input, &PixelBuffer::filled(5, 3, [10, 20, 30, 255]).unwrap()).unwrap();

    let operation = Operation::effect(EffectKind::Thermal, 1.0).unwrap();
    run_buffer_command(&AppConfig::default(), operation, &input, &output)
        .await
        .unwrap();

    let result = read_png(&output).unwrap();
    assert_eq!((result.width(), result.height()), (5, 3));
}

#[tokio::test]
async fn test_extract_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    write_png(&input, &PixelBuffer::filled(4, 4, [255, 255, 255, 255]).unwrap()).unwrap();

    let colors = run_extract_command(&AppConfig::default(), &input)
        .await
        .unwrap();

    assert_eq!(colors.len(), 1);
    assert_eq!(colors[0].hex, "#ffffff");
    assert_eq!(colors[0].rgb, "rgb(255,255,255)");
    // every 4th of 16 pixels
    assert_eq!(colors[0].count, 4);
}

#[tokio::test]
async fn test_missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_extract_command(&AppConfig::default(), &dir.path().join("absent.png"))
        .await
        .unwrap_err();

    assert!(err.to_string().starts_with("Failed to read"), "error: {err}");
}

#[tokio::test]
async fn test_input_over_pixel_limit_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_png(&input, &PixelBuffer::filled(2, 2, [1, 2, 3, 255]).unwrap()).unwrap();

    let mut config = AppConfig::default();
    config.limits.max_pixels = 3;
    let operation = Operation::effect(EffectKind::Vintage, 1.0).unwrap();
    let err = run_buffer_command(&config, operation, &input, &output)
        .await
        .unwrap_err();

    assert!(
        format!("{err:#}").contains("Image too large: 2x2 exceeds 3 pixels"),
        "error: {err:#}"
    );
    assert!(!output.exists());
}
