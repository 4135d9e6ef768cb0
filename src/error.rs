use std::time::Duration;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cielab_ops::{BufferError, ProcessError};
use thiserror::Error;

use crate::models::ResponseMessage;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Malformed request: {0}")]
    MalformedJson(String),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Task(#[from] TaskError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedJson(rejection.body_text())
    }
}

/// A request that cannot be turned into an operation.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Invalid params for {operation}: {message}")]
    InvalidParams {
        operation: &'static str,
        message: String,
    },

    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error("Buffer data is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Buffer too large: {width}x{height} exceeds {max} pixels")]
    TooLarge { width: u32, height: u32, max: u64 },
}

impl From<BufferError> for ProtocolError {
    fn from(e: BufferError) -> Self {
        ProtocolError::Process(ProcessError::Buffer(e))
    }
}

/// Terminal failure of one TaskHost invocation.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task failed: {0}")]
    Failed(String),

    #[error("Task timed out after {}s", .0.as_secs_f64())]
    TimedOut(Duration),
}

#[derive(Debug, Error)]
pub enum ImageIoError {
    #[error("PNG decode error: {0}")]
    Decode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("Unsupported PNG color type: {0:?}")]
    UnsupportedColorType(png::ColorType),

    #[error("Image too large: {width}x{height} exceeds {max} pixels")]
    TooLarge { width: u32, height: u32, max: u64 },

    #[error("Invalid image: {0}")]
    Buffer(#[from] BufferError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedJson(_) | ApiError::Protocol(_) => StatusCode::BAD_REQUEST,
            ApiError::Task(TaskError::Failed(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Task(TaskError::TimedOut(_)) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        (status, Json(ResponseMessage::error(self.to_string()))).into_response()
    }
}
