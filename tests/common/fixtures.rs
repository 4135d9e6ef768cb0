//! Test fixtures and request builders.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde_json::{json, Value};

/// Wire buffer of `width * height` copies of one RGBA pixel
pub fn filled_buffer(width: u32, height: u32, rgba: [u8; 4]) -> Value {
    let data = rgba.repeat((width * height) as usize);
    buffer(width, height, &data)
}

/// Wire buffer from raw RGBA bytes
pub fn buffer(width: u32, height: u32, data: &[u8]) -> Value {
    json!({"width": width, "height": height, "data": STANDARD.encode(data)})
}

/// Request message for `operation`
pub fn request(operation: &str, buffer: Value, params: Value) -> Value {
    json!({"operation": operation, "buffer": buffer, "params": params})
}
