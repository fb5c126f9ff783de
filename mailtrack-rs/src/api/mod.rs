//! REST API module
//!
//! HTTP surface for the email tracker: CRUD endpoints per resource plus
//! the reply-drafting and template-processing operations.

pub mod categories;
pub mod emails;
pub mod followups;
pub mod server;
pub mod templates;
pub mod users;

pub use server::{ApiServer, AppState};

use crate::error::TrackError;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// API error response body
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(msg: &str) -> Self {
        Self {
            error: msg.to_string(),
        }
    }
}

/// Handler result carrying a status + JSON error pair on failure
pub type ApiResult<T> = std::result::Result<T, (StatusCode, Json<ApiError>)>;

/// Map a domain error onto an HTTP status and JSON error body
pub(crate) fn into_response_error(e: TrackError) -> (StatusCode, Json<ApiError>) {
    let status = match &e {
        TrackError::NotFound(_) => StatusCode::NOT_FOUND,
        TrackError::Duplicate(_) => StatusCode::CONFLICT,
        TrackError::Validation(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(ApiError::new(&e.to_string())))
}
