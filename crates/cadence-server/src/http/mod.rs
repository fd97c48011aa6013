//! HTTP handlers for the task API.
//!
//! JSON endpoints answer errors as `{"error": "..."}`; the next-date endpoint
//! answers in plain text.

pub mod nextdate;
pub mod tasks;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cadence_core::error::CoreError;
use serde_json::json;
use tracing::{error, warn};

/// Error returned by the JSON handlers.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let status = match &err {
            e if e.is_client_error() => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = match &err {
            CoreError::NotFound(_) => "task not found".to_string(),
            other => other.to_string(),
        };

        if status.is_server_error() {
            error!(error = ?err, "request failed");
        } else {
            warn!(error = %err, "request rejected");
        }
        Self { status, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Parses the `id` query parameter shared by the single-task endpoints.
pub fn parse_task_id(id: Option<&str>) -> Result<i64, ApiError> {
    match id.map(str::trim) {
        None | Some("") => Err(ApiError::bad_request("task ID is required")),
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| ApiError::bad_request("invalid task ID")),
    }
}
