//! API endpoints for tracked emails

use crate::api::server::AppState;
use crate::api::{into_response_error, ApiResult};
use crate::emails::export;
use crate::emails::types::{
    CreateEmailRequest, Email, EmailPage, EmailSearchParams, UpdateEmailRequest,
};
use crate::reply;
use crate::reply::types::{GenerateReplyRequest, GeneratedReply};
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

/// GET /api/emails - List all emails
pub async fn list_emails(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Email>>> {
    let emails = state
        .emails
        .list_emails()
        .await
        .map_err(into_response_error)?;

    Ok(Json(emails))
}

/// GET /api/emails/:id - Get a specific email
pub async fn get_email(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Email>> {
    let email = state
        .emails
        .get_email(&id)
        .await
        .map_err(into_response_error)?;

    Ok(Json(email))
}

/// POST /api/emails - Create a new email record
pub async fn create_email(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateEmailRequest>,
) -> ApiResult<(StatusCode, Json<Email>)> {
    let email = state
        .emails
        .create_email(payload)
        .await
        .map_err(into_response_error)?;

    Ok((StatusCode::CREATED, Json(email)))
}

/// PUT /api/emails/:id - Update an email record
pub async fn update_email(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateEmailRequest>,
) -> ApiResult<Json<Email>> {
    let email = state
        .emails
        .update_email(&id, payload)
        .await
        .map_err(into_response_error)?;

    Ok(Json(email))
}

/// DELETE /api/emails/:id - Delete an email record
pub async fn delete_email(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .emails
        .delete_email(&id)
        .await
        .map_err(into_response_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/emails/:id/archive - Archive an email
pub async fn archive_email(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Email>> {
    let email = state
        .emails
        .archive_email(&id)
        .await
        .map_err(into_response_error)?;

    Ok(Json(email))
}

/// PATCH /api/emails/:id/unarchive - Unarchive an email
pub async fn unarchive_email(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Email>> {
    let email = state
        .emails
        .unarchive_email(&id)
        .await
        .map_err(into_response_error)?;

    Ok(Json(email))
}

/// GET /api/emails/user/:user_id - List a user's emails
pub async fn list_emails_by_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<Email>>> {
    let emails = state
        .emails
        .list_emails_by_user(&user_id)
        .await
        .map_err(into_response_error)?;

    Ok(Json(emails))
}

/// GET /api/emails/search - Search emails with filters, paging and sorting
pub async fn search_emails(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EmailSearchParams>,
) -> ApiResult<Json<EmailPage>> {
    let page = state
        .emails
        .search_emails(&params)
        .await
        .map_err(into_response_error)?;

    Ok(Json(page))
}

/// Query parameters for the export endpoint
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    pub user_id: String,
    #[serde(default = "default_export_format")]
    pub format: String,
}

fn default_export_format() -> String {
    "json".to_string()
}

/// GET /api/emails/export - Download a user's emails as JSON or CSV
pub async fn export_emails(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExportParams>,
) -> ApiResult<impl IntoResponse> {
    let emails = state
        .emails
        .list_emails_by_user(&params.user_id)
        .await
        .map_err(into_response_error)?;

    let (content, content_type, filename) = if params.format.eq_ignore_ascii_case("csv") {
        (
            export::export_csv(&emails).map_err(into_response_error)?,
            "text/csv",
            format!("emails_{}.csv", params.user_id),
        )
    } else {
        (
            export::export_json(&emails).map_err(into_response_error)?,
            "application/json",
            format!("emails_{}.json", params.user_id),
        )
    };

    let headers = [
        (header::CONTENT_TYPE, content_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];

    Ok((headers, content))
}

/// POST /api/emails/:id/generate-reply - Draft a reply for a stored email
pub async fn generate_reply(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<GeneratedReply>> {
    let email = state
        .emails
        .get_email(&id)
        .await
        .map_err(into_response_error)?;

    let draft = reply::compose(&email.subject, &email.body, &email.sender);
    Ok(Json(draft))
}

/// POST /api/emails/generate-reply - Draft a reply from raw content
pub async fn generate_reply_from_content(
    Json(payload): Json<GenerateReplyRequest>,
) -> Json<GeneratedReply> {
    Json(reply::compose(
        &payload.subject,
        &payload.body,
        &payload.sender_email,
    ))
}
