//! Project handlers

use crate::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use taskboard_types::Project;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateProjectRequest {
    name: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    id: u64,
    name: String,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            name: project.name,
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateProjectRequest>,
) -> Json<ProjectResponse> {
    Json(state.projects.add(Project::new(req.name)).into())
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<ProjectResponse>> {
    Json(state.projects.list().into_iter().map(Into::into).collect())
}
