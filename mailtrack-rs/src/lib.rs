//! mailtrack-rs: Email tracking and assisted-reply backend
//!
//! A REST backend for tracking emails, per-email follow-up reminders and
//! reusable reply templates, with a rule-based assistant that drafts canned
//! replies from keyword heuristics.
//!
//! # Features
//!
//! - **Email store**: CRUD, archiving, filtered search with paging, JSON/CSV export
//! - **Follow-ups**: reminders per email with an automatic overdue sweep
//! - **Templates**: per-user reply templates with `{placeholder}` substitution
//! - **Assisted replies**: deterministic keyword classification into eight
//!   reply categories with per-category prose and an independent tone hint
//!
//! # Example
//!
//! ```no_run
//! use mailtrack_rs::api::{ApiServer, AppState};
//! use mailtrack_rs::categories::CategoryManager;
//! use mailtrack_rs::emails::EmailManager;
//! use mailtrack_rs::followups::FollowUpManager;
//! use mailtrack_rs::templates::TemplateManager;
//! use mailtrack_rs::users::UserManager;
//! use sqlx::SqlitePool;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = SqlitePool::connect("sqlite::memory:").await?;
//!
//!     let users = Arc::new(UserManager::new(db.clone()));
//!     let categories = Arc::new(CategoryManager::new(db.clone()));
//!     let emails = Arc::new(EmailManager::new(db.clone(), users.clone(), categories.clone()));
//!     let followups = Arc::new(FollowUpManager::new(db.clone(), emails.clone()));
//!     let templates = Arc::new(TemplateManager::new(db.clone(), users.clone()));
//!
//!     let state = Arc::new(AppState { users, categories, emails, followups, templates });
//!     let server = ApiServer::new(state, "0.0.0.0:8080".to_string());
//!     server.run().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`api`]: REST endpoints
//! - [`config`]: Configuration management
//! - [`emails`]: Tracked email store
//! - [`error`]: Error types and handling
//! - [`followups`]: Follow-up reminders and the overdue sweep
//! - [`reply`]: Assisted reply engine
//! - [`templates`]: Reply templates with placeholder substitution
//! - [`users`], [`categories`]: Record stores referenced by the rest

pub mod api;
pub mod categories;
pub mod config;
pub mod emails;
pub mod error;
pub mod followups;
pub mod reply;
pub mod templates;
pub mod users;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, TrackError};
