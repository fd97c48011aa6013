//! Task CRUD endpoints: `/api/task`, `/api/tasks` and `/api/task/done`.

use axum::{
    body::Bytes,
    extract::{Query, State},
    Json,
};
use cadence_core::models::{CompletionResult, NewTask, Task};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, warn};

use super::{parse_task_id, ApiError};
use crate::app::AppState;

#[derive(Debug, Deserialize)]
pub struct IdParams {
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TasksResponse {
    pub tasks: Vec<Task>,
}

fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, "invalid JSON in request body");
        ApiError::bad_request("failed to deserialize JSON")
    })
}

/// GET /api/tasks?search=
pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<TasksResponse>, ApiError> {
    let search = params.search.unwrap_or_default();
    let tasks = state
        .service
        .list_tasks(&search, state.config.search_limit)
        .await?;
    Ok(Json(TasksResponse { tasks }))
}

/// GET /api/task?id=
pub async fn get_task(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IdParams>,
) -> Result<Json<Task>, ApiError> {
    let id = parse_task_id(params.id.as_deref())?;
    Ok(Json(state.service.get_task(id).await?))
}

/// POST /api/task
pub async fn create_task(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let data: NewTask = parse_body(&body)?;
    let task = state.service.create_task(data, state.today()).await?;
    Ok(Json(json!({ "id": task.id.to_string() })))
}

/// PUT /api/task
pub async fn update_task(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let task: Task = parse_body(&body)?;
    if task.id <= 0 {
        return Err(ApiError::bad_request("task ID is required"));
    }
    state.service.update_task(task, state.today()).await?;
    Ok(Json(json!({})))
}

/// DELETE /api/task?id=
pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IdParams>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_task_id(params.id.as_deref())?;
    state.service.delete_task(id).await?;
    Ok(Json(json!({})))
}

/// POST /api/task/done?id=
pub async fn complete_task(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IdParams>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_task_id(params.id.as_deref())?;
    match state.service.complete_task(id).await? {
        CompletionResult::Deleted(task) => info!(id = task.id, "task done"),
        CompletionResult::Rescheduled(task) => {
            info!(id = task.id, next = %task.date, "task done, next occurrence scheduled")
        }
    }
    Ok(Json(json!({})))
}
