//! Task handlers

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taskboard_types::{Task, TaskPatch};

/// Create-request body. `id` and `created_at` are server-assigned, so the
/// body rejects them along with any other unknown field.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    #[serde(default)]
    completed: bool,
    project_id: Option<u64>,
    user_id: Option<u64>,
}

/// Response shape for a task, kept separate from the stored record.
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    id: u64,
    title: String,
    description: String,
    completed: bool,
    project_id: Option<u64>,
    user_id: Option<u64>,
    created_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            completed: task.completed,
            project_id: task.project_id,
            user_id: task.user_id,
            created_at: task.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteTaskResponse {
    status: &'static str,
    message: &'static str,
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> Json<TaskResponse> {
    let task = Task::new(
        req.title,
        req.description,
        req.completed,
        req.project_id,
        req.user_id,
    );
    Json(state.tasks.add(task).into())
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<TaskResponse>, ApiError> {
    state
        .tasks
        .get(id)
        .map(|task| Json(task.into()))
        .ok_or(ApiError::NotFound("Task"))
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<TaskResponse>> {
    Json(state.tasks.list().into_iter().map(Into::into).collect())
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<TaskResponse>, ApiError> {
    state
        .tasks
        .update(id, patch)
        .map(|task| Json(task.into()))
        .ok_or(ApiError::NotFound("Task"))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteTaskResponse>, ApiError> {
    if state.tasks.delete(id) {
        Ok(Json(DeleteTaskResponse {
            status: "success",
            message: "Task deleted",
        }))
    } else {
        Err(ApiError::NotFound("Task"))
    }
}
