//! Category manager for CRUD operations

use crate::categories::types::{Category, CreateCategoryRequest, UpdateCategoryRequest};
use crate::error::{Result, TrackError};
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Manages email categories with database persistence
pub struct CategoryManager {
    db: SqlitePool,
}

impl CategoryManager {
    /// Create a new category manager
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Initialize the categories table
    pub async fn init_db(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS categories (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS idx_categories_name ON categories(name)")
            .execute(&self.db)
            .await?;

        Ok(())
    }

    /// Create a new category
    pub async fn create_category(&self, request: CreateCategoryRequest) -> Result<Category> {
        if self.exists_by_name(&request.name).await? {
            return Err(TrackError::Duplicate(format!(
                "Category already exists with name: {}",
                request.name
            )));
        }

        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO categories (id, name, description, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&request.name)
        .bind(&request.description)
        .bind(now.to_rfc3339())
        .execute(&self.db)
        .await?;

        Ok(Category {
            id,
            name: request.name,
            description: request.description,
            created_at: now,
        })
    }

    /// Get a category by ID
    pub async fn get_category(&self, id: &str) -> Result<Category> {
        let row =
            sqlx::query("SELECT id, name, description, created_at FROM categories WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.db)
                .await?;

        match row {
            Some(row) => row_to_category(row),
            None => Err(TrackError::NotFound(format!(
                "Category not found with id: {}",
                id
            ))),
        }
    }

    /// List all categories
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let rows =
            sqlx::query("SELECT id, name, description, created_at FROM categories ORDER BY name")
                .fetch_all(&self.db)
                .await?;

        rows.into_iter().map(row_to_category).collect()
    }

    /// Update a category
    pub async fn update_category(
        &self,
        id: &str,
        request: UpdateCategoryRequest,
    ) -> Result<Category> {
        let category = self.get_category(id).await?;

        if category.name != request.name && self.exists_by_name(&request.name).await? {
            return Err(TrackError::Duplicate(format!(
                "Category already exists with name: {}",
                request.name
            )));
        }

        sqlx::query("UPDATE categories SET name = ?, description = ? WHERE id = ?")
            .bind(&request.name)
            .bind(&request.description)
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(Category {
            id: category.id,
            name: request.name,
            description: request.description,
            created_at: category.created_at,
        })
    }

    /// Delete a category
    pub async fn delete_category(&self, id: &str) -> Result<()> {
        self.get_category(id).await?;

        sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(())
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool> {
        let row = sqlx::query("SELECT 1 FROM categories WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.db)
            .await?;

        Ok(row.is_some())
    }
}

fn row_to_category(row: sqlx::sqlite::SqliteRow) -> Result<Category> {
    let created_at_str: String = row.try_get("created_at")?;
    let created_at = DateTime::parse_from_rfc3339(&created_at_str)
        .map_err(|e| TrackError::Parse(format!("Invalid created_at date: {}", e)))?
        .with_timezone(&Utc);

    Ok(Category {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        created_at,
    })
}
