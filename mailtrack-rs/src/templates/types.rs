//! Template types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored reply template
///
/// The body may contain zero or more `{identifier}` placeholder tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create a new template
#[derive(Debug, Deserialize)]
pub struct CreateTemplateRequest {
    pub user_id: String,
    pub title: String,
    pub body: String,
}

/// Request to replace an existing template
#[derive(Debug, Deserialize)]
pub struct UpdateTemplateRequest {
    pub user_id: String,
    pub title: String,
    pub body: String,
}
