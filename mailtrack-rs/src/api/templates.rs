//! API endpoints for reply templates

use crate::api::server::AppState;
use crate::api::{into_response_error, ApiResult};
use crate::templates::types::{CreateTemplateRequest, Template, UpdateTemplateRequest};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::collections::HashMap;
use std::sync::Arc;

/// GET /api/templates - List all templates
pub async fn list_templates(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Template>>> {
    let templates = state
        .templates
        .list_templates()
        .await
        .map_err(into_response_error)?;

    Ok(Json(templates))
}

/// GET /api/templates/:id - Get a specific template
pub async fn get_template(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Template>> {
    let template = state
        .templates
        .get_template(&id)
        .await
        .map_err(into_response_error)?;

    Ok(Json(template))
}

/// POST /api/templates - Create a new template
pub async fn create_template(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateTemplateRequest>,
) -> ApiResult<(StatusCode, Json<Template>)> {
    let template = state
        .templates
        .create_template(payload)
        .await
        .map_err(into_response_error)?;

    Ok((StatusCode::CREATED, Json(template)))
}

/// PUT /api/templates/:id - Replace a template
pub async fn update_template(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTemplateRequest>,
) -> ApiResult<Json<Template>> {
    let template = state
        .templates
        .update_template(&id, payload)
        .await
        .map_err(into_response_error)?;

    Ok(Json(template))
}

/// DELETE /api/templates/:id - Delete a template
pub async fn delete_template(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .templates
        .delete_template(&id)
        .await
        .map_err(into_response_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/templates/user/:user_id - List a user's templates
pub async fn list_templates_by_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<Template>>> {
    let templates = state
        .templates
        .list_templates_by_user(&user_id)
        .await
        .map_err(into_response_error)?;

    Ok(Json(templates))
}

/// POST /api/templates/:id/process - Fill a template's placeholders
///
/// The response body is the processed text itself, as in the original API.
pub async fn process_template(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(variables): Json<HashMap<String, String>>,
) -> ApiResult<String> {
    let processed = state
        .templates
        .process_template(&id, &variables)
        .await
        .map_err(into_response_error)?;

    Ok(processed)
}
