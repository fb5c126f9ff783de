//! API Server - HTTP server for the REST API

use axum::{
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{categories, emails, followups, templates, users};
use crate::categories::CategoryManager;
use crate::emails::EmailManager;
use crate::followups::FollowUpManager;
use crate::templates::TemplateManager;
use crate::users::UserManager;

/// Shared application state
pub struct AppState {
    pub users: Arc<UserManager>,
    pub categories: Arc<CategoryManager>,
    pub emails: Arc<EmailManager>,
    pub followups: Arc<FollowUpManager>,
    pub templates: Arc<TemplateManager>,
}

/// API Server configuration
pub struct ApiServer {
    state: Arc<AppState>,
    addr: String,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(state: Arc<AppState>, addr: String) -> Self {
        Self { state, addr }
    }

    /// Build the router with all routes
    pub fn router(&self) -> Router {
        // CORS configuration - the original API is fully open
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let email_routes = Router::new()
            .route("/emails", get(emails::list_emails))
            .route("/emails", post(emails::create_email))
            .route("/emails/search", get(emails::search_emails))
            .route("/emails/export", get(emails::export_emails))
            .route("/emails/generate-reply", post(emails::generate_reply_from_content))
            .route("/emails/user/:user_id", get(emails::list_emails_by_user))
            .route("/emails/:id", get(emails::get_email))
            .route("/emails/:id", put(emails::update_email))
            .route("/emails/:id", delete(emails::delete_email))
            .route("/emails/:id/archive", patch(emails::archive_email))
            .route("/emails/:id/unarchive", patch(emails::unarchive_email))
            .route("/emails/:id/generate-reply", post(emails::generate_reply));

        let followup_routes = Router::new()
            .route("/followups", get(followups::list_followups))
            .route("/followups", post(followups::create_followup))
            .route("/followups/overdue", get(followups::list_overdue))
            .route("/followups/email/:email_id", get(followups::list_followups_by_email))
            .route("/followups/:id", get(followups::get_followup))
            .route("/followups/:id", put(followups::update_followup))
            .route("/followups/:id", delete(followups::delete_followup))
            .route("/followups/:id/status", patch(followups::update_status));

        let template_routes = Router::new()
            .route("/templates", get(templates::list_templates))
            .route("/templates", post(templates::create_template))
            .route("/templates/user/:user_id", get(templates::list_templates_by_user))
            .route("/templates/:id", get(templates::get_template))
            .route("/templates/:id", put(templates::update_template))
            .route("/templates/:id", delete(templates::delete_template))
            .route("/templates/:id/process", post(templates::process_template));

        let user_routes = Router::new()
            .route("/users", get(users::list_users))
            .route("/users", post(users::create_user))
            .route("/users/:id", get(users::get_user))
            .route("/users/:id", put(users::update_user))
            .route("/users/:id", delete(users::delete_user));

        let category_routes = Router::new()
            .route("/categories", get(categories::list_categories))
            .route("/categories", post(categories::create_category))
            .route("/categories/:id", get(categories::get_category))
            .route("/categories/:id", put(categories::update_category))
            .route("/categories/:id", delete(categories::delete_category));

        let api_routes = email_routes
            .merge(followup_routes)
            .merge(template_routes)
            .merge(user_routes)
            .merge(category_routes);

        Router::new()
            .route("/health", get(health))
            .nest("/api", api_routes)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(self.state.clone())
    }

    /// Start the API server
    pub async fn run(&self) -> std::io::Result<()> {
        let router = self.router();

        info!("Starting API server on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

/// GET /health - liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
