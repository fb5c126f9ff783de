//! Template manager for CRUD operations and processing

use crate::error::{Result, TrackError};
use crate::templates::renderer::TemplateRenderer;
use crate::templates::types::{CreateTemplateRequest, Template, UpdateTemplateRequest};
use crate::users::UserManager;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Manages reply templates with database persistence
pub struct TemplateManager {
    db: SqlitePool,
    users: Arc<UserManager>,
}

impl TemplateManager {
    /// Create a new template manager
    pub fn new(db: SqlitePool, users: Arc<UserManager>) -> Self {
        Self { db, users }
    }

    /// Initialize the templates table
    pub async fn init_db(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS templates (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                title TEXT NOT NULL,
                body TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_templates_user ON templates(user_id)")
            .execute(&self.db)
            .await?;

        Ok(())
    }

    /// Create a new template
    pub async fn create_template(&self, request: CreateTemplateRequest) -> Result<Template> {
        self.users.get_user(&request.user_id).await?;

        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO templates (id, user_id, title, body, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&request.user_id)
        .bind(&request.title)
        .bind(&request.body)
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&self.db)
        .await?;

        Ok(Template {
            id,
            user_id: request.user_id,
            title: request.title,
            body: request.body,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a template by ID
    pub async fn get_template(&self, id: &str) -> Result<Template> {
        let row = sqlx::query(
            "SELECT id, user_id, title, body, created_at, updated_at FROM templates WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        match row {
            Some(row) => row_to_template(row),
            None => Err(TrackError::NotFound(format!(
                "Template not found with id: {}",
                id
            ))),
        }
    }

    /// List all templates
    pub async fn list_templates(&self) -> Result<Vec<Template>> {
        let rows = sqlx::query(
            "SELECT id, user_id, title, body, created_at, updated_at FROM templates ORDER BY title",
        )
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(row_to_template).collect()
    }

    /// List templates owned by a user
    pub async fn list_templates_by_user(&self, user_id: &str) -> Result<Vec<Template>> {
        self.users.get_user(user_id).await?;

        let rows = sqlx::query(
            r#"
            SELECT id, user_id, title, body, created_at, updated_at
            FROM templates
            WHERE user_id = ?
            ORDER BY title
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(row_to_template).collect()
    }

    /// Replace a template's owner, title and body
    pub async fn update_template(
        &self,
        id: &str,
        request: UpdateTemplateRequest,
    ) -> Result<Template> {
        let template = self.get_template(id).await?;

        if template.user_id != request.user_id {
            self.users.get_user(&request.user_id).await?;
        }

        let now = Utc::now();

        sqlx::query("UPDATE templates SET user_id = ?, title = ?, body = ?, updated_at = ? WHERE id = ?")
            .bind(&request.user_id)
            .bind(&request.title)
            .bind(&request.body)
            .bind(now.to_rfc3339())
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(Template {
            id: template.id,
            user_id: request.user_id,
            title: request.title,
            body: request.body,
            created_at: template.created_at,
            updated_at: now,
        })
    }

    /// Delete a template
    pub async fn delete_template(&self, id: &str) -> Result<()> {
        self.get_template(id).await?;

        sqlx::query("DELETE FROM templates WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(())
    }

    /// Fetch a template and fill its placeholders from a variable map
    pub async fn process_template(
        &self,
        id: &str,
        variables: &HashMap<String, String>,
    ) -> Result<String> {
        let template = self.get_template(id).await?;
        Ok(TemplateRenderer::substitute(&template.body, variables))
    }
}

fn row_to_template(row: sqlx::sqlite::SqliteRow) -> Result<Template> {
    let created_at_str: String = row.try_get("created_at")?;
    let updated_at_str: String = row.try_get("updated_at")?;

    let created_at = DateTime::parse_from_rfc3339(&created_at_str)
        .map_err(|e| TrackError::Parse(format!("Invalid created_at date: {}", e)))?
        .with_timezone(&Utc);

    let updated_at = DateTime::parse_from_rfc3339(&updated_at_str)
        .map_err(|e| TrackError::Parse(format!("Invalid updated_at date: {}", e)))?
        .with_timezone(&Utc);

    Ok(Template {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        title: row.try_get("title")?,
        body: row.try_get("body")?,
        created_at,
        updated_at,
    })
}
