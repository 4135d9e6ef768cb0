//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::error::ApiError;
use crate::models::{AppConfig, RequestMessage, ResponseMessage};
use crate::services::{CoreRunner, OperationRunner};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub runner: Arc<dyn OperationRunner>,
}

impl AppState {
    /// State with a custom runner (tests drive hosts with slow or faulty runners)
    pub fn with_runner(config: AppConfig, runner: Arc<dyn OperationRunner>) -> Self {
        Self {
            config: Arc::new(config),
            runner,
        }
    }
}

/// Create application state from a loaded configuration.
pub fn create_app_state(config: AppConfig) -> AppState {
    AppState::with_runner(config, Arc::new(CoreRunner))
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.max_body_bytes;

    Router::new()
        .route("/api/process", post(handle_process))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}

// Wrapper handler to extract state components for the underlying API handler

async fn handle_process(
    State(state): State<AppState>,
    request: Result<Json<RequestMessage>, JsonRejection>,
) -> Result<Json<ResponseMessage>, ApiError> {
    api::handle_process(State(state.config), State(state.runner), request).await
}
