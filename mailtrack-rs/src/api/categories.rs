//! API endpoints for categories

use crate::api::server::AppState;
use crate::api::{into_response_error, ApiResult};
use crate::categories::types::{Category, CreateCategoryRequest, UpdateCategoryRequest};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

/// GET /api/categories - List all categories
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Category>>> {
    let categories = state
        .categories
        .list_categories()
        .await
        .map_err(into_response_error)?;

    Ok(Json(categories))
}

/// GET /api/categories/:id - Get a specific category
pub async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Category>> {
    let category = state
        .categories
        .get_category(&id)
        .await
        .map_err(into_response_error)?;

    Ok(Json(category))
}

/// POST /api/categories - Create a new category
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateCategoryRequest>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    let category = state
        .categories
        .create_category(payload)
        .await
        .map_err(into_response_error)?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/categories/:id - Update a category
pub async fn update_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> ApiResult<Json<Category>> {
    let category = state
        .categories
        .update_category(&id, payload)
        .await
        .map_err(into_response_error)?;

    Ok(Json(category))
}

/// DELETE /api/categories/:id - Delete a category
pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .categories
        .delete_category(&id)
        .await
        .map_err(into_response_error)?;

    Ok(StatusCode::NO_CONTENT)
}
