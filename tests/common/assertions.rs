//! Assertion helpers for tests.

use axum::http::StatusCode;
use base64::{engine::general_purpose::STANDARD, Engine};
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert an `{status: "error", reason}` body with the given HTTP status,
/// and return the reason.
pub fn assert_error_response(response: &TestResponse, expected: StatusCode) -> String {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();

    assert_eq!(json["status"], "error", "Full response: {json}");
    assert!(json.get("result").is_none(), "Error must not carry a buffer");
    assert!(json.get("colors").is_none(), "Error must not carry colors");
    json["reason"]
        .as_str()
        .expect("Expected reason to be a string")
        .to_string()
}

/// Assert an ok buffer response and return `(width, height, rgba bytes)`.
pub fn assert_buffer_response(response: &TestResponse) -> (u32, u32, Vec<u8>) {
    assert_ok(response);
    let json: serde_json::Value = response.json();

    assert_eq!(json["status"], "ok", "Full response: {json}");
    assert!(json.get("colors").is_none(), "Buffer responses carry no colors");
    let result = &json["result"];
    let data = STANDARD
        .decode(result["data"].as_str().expect("Expected base64 data"))
        .expect("Expected valid base64");

    (
        result["width"].as_u64().unwrap() as u32,
        result["height"].as_u64().unwrap() as u32,
        data,
    )
}

/// Assert an ok colors response and return the color entries.
pub fn assert_colors_response(response: &TestResponse) -> Vec<serde_json::Value> {
    assert_ok(response);
    let json: serde_json::Value = response.json();

    assert_eq!(json["status"], "ok", "Full response: {json}");
    assert!(json.get("result").is_none(), "Extract responses carry no buffer");
    json["colors"]
        .as_array()
        .expect("Expected colors array")
        .clone()
}
