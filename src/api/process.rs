use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::error::ApiError;
use crate::models::{AppConfig, RequestMessage, ResponseMessage};
use crate::services::{OperationRunner, TaskHost};

/// Run one color operation
///
/// The buffer is validated, handed to a fresh TaskHost and the single
/// response of that host is returned. Buffer operations answer with
/// `result`, `extract` answers with `colors`.
#[utoipa::path(
    post,
    path = "/api/process",
    request_body = RequestMessage,
    responses(
        (status = 200, description = "Operation succeeded", body = ResponseMessage),
        (status = 400, description = "Malformed request, unknown operation or invalid params", body = ResponseMessage),
        (status = 500, description = "Operation failed", body = ResponseMessage),
        (status = 504, description = "Operation exceeded the task deadline", body = ResponseMessage),
    ),
    tag = "Processing"
)]
pub async fn handle_process(
    State(config): State<Arc<AppConfig>>,
    State(runner): State<Arc<dyn OperationRunner>>,
    request: Result<Json<RequestMessage>, JsonRejection>,
) -> Result<Json<ResponseMessage>, ApiError> {
    let Json(request) = request?;
    tracing::debug!(
        operation = %request.operation,
        width = request.buffer.width,
        height = request.buffer.height,
        "Process request received"
    );

    let (operation, buffer) = request.validate(&config)?;
    let host = TaskHost::new(runner, config.task_timeout());
    let output = host.run(operation, buffer).await?;

    Ok(Json(ResponseMessage::ok(&output)))
}
