//! API endpoints for follow-up reminders

use crate::api::server::AppState;
use crate::api::{into_response_error, ApiResult};
use crate::followups::types::{
    CreateFollowUpRequest, FollowUp, FollowUpStatus, UpdateFollowUpRequest,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

/// GET /api/followups - List all follow-ups
pub async fn list_followups(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<FollowUp>>> {
    let followups = state
        .followups
        .list_followups()
        .await
        .map_err(into_response_error)?;

    Ok(Json(followups))
}

/// GET /api/followups/:id - Get a specific follow-up
pub async fn get_followup(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<FollowUp>> {
    let followup = state
        .followups
        .get_followup(&id)
        .await
        .map_err(into_response_error)?;

    Ok(Json(followup))
}

/// POST /api/followups - Create a new follow-up
pub async fn create_followup(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateFollowUpRequest>,
) -> ApiResult<(StatusCode, Json<FollowUp>)> {
    let followup = state
        .followups
        .create_followup(payload)
        .await
        .map_err(into_response_error)?;

    Ok((StatusCode::CREATED, Json(followup)))
}

/// PUT /api/followups/:id - Update a follow-up
pub async fn update_followup(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateFollowUpRequest>,
) -> ApiResult<Json<FollowUp>> {
    let followup = state
        .followups
        .update_followup(&id, payload)
        .await
        .map_err(into_response_error)?;

    Ok(Json(followup))
}

/// Query parameter for the status endpoint
#[derive(Debug, Deserialize)]
pub struct StatusParams {
    pub status: FollowUpStatus,
}

/// PATCH /api/followups/:id/status - Set only the status
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<StatusParams>,
) -> ApiResult<Json<FollowUp>> {
    let followup = state
        .followups
        .update_status(&id, params.status)
        .await
        .map_err(into_response_error)?;

    Ok(Json(followup))
}

/// DELETE /api/followups/:id - Delete a follow-up
pub async fn delete_followup(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .followups
        .delete_followup(&id)
        .await
        .map_err(into_response_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/followups/email/:email_id - List follow-ups for an email
pub async fn list_followups_by_email(
    State(state): State<Arc<AppState>>,
    Path(email_id): Path<String>,
) -> ApiResult<Json<Vec<FollowUp>>> {
    let followups = state
        .followups
        .list_followups_by_email(&email_id)
        .await
        .map_err(into_response_error)?;

    Ok(Json(followups))
}

/// GET /api/followups/overdue - List overdue follow-ups
pub async fn list_overdue(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<FollowUp>>> {
    let followups = state
        .followups
        .list_overdue()
        .await
        .map_err(into_response_error)?;

    Ok(Json(followups))
}
