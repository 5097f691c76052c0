//! User handlers

use crate::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use taskboard_types::User;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    name: String,
    email: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    id: u64,
    name: String,
    email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Json<UserResponse> {
    Json(state.users.add(User::new(req.name, req.email)).into())
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<UserResponse>> {
    Json(state.users.list().into_iter().map(Into::into).collect())
}
