//! API endpoints for users

use crate::api::server::AppState;
use crate::api::{into_response_error, ApiResult};
use crate::users::types::{CreateUserRequest, UpdateUserRequest, User};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

/// GET /api/users - List all users
pub async fn list_users(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<User>>> {
    let users = state.users.list_users().await.map_err(into_response_error)?;
    Ok(Json(users))
}

/// GET /api/users/:id - Get a specific user
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    let user = state
        .users
        .get_user(&id)
        .await
        .map_err(into_response_error)?;

    Ok(Json(user))
}

/// POST /api/users - Create a new user
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let user = state
        .users
        .create_user(payload)
        .await
        .map_err(into_response_error)?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /api/users/:id - Update a user
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> ApiResult<Json<User>> {
    let user = state
        .users
        .update_user(&id, payload)
        .await
        .map_err(into_response_error)?;

    Ok(Json(user))
}

/// DELETE /api/users/:id - Delete a user
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .users
        .delete_user(&id)
        .await
        .map_err(into_response_error)?;

    Ok(StatusCode::NO_CONTENT)
}
