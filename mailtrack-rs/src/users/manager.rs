//! User manager for CRUD operations

use crate::error::{Result, TrackError};
use crate::users::types::{CreateUserRequest, UpdateUserRequest, User};
use crate::utils::email::validate_email;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Manages user records with database persistence
pub struct UserManager {
    db: SqlitePool,
}

impl UserManager {
    /// Create a new user manager
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Initialize the users table
    pub async fn init_db(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON users(email)")
            .execute(&self.db)
            .await?;

        Ok(())
    }

    /// Create a new user
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User> {
        validate_email(&request.email)?;

        if self.exists_by_email(&request.email).await? {
            return Err(TrackError::Duplicate(format!(
                "User already exists with email: {}",
                request.email
            )));
        }

        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        sqlx::query("INSERT INTO users (id, name, email, created_at) VALUES (?, ?, ?, ?)")
            .bind(&id)
            .bind(&request.name)
            .bind(&request.email)
            .bind(now.to_rfc3339())
            .execute(&self.db)
            .await?;

        Ok(User {
            id,
            name: request.name,
            email: request.email,
            created_at: now,
        })
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: &str) -> Result<User> {
        let row = sqlx::query("SELECT id, name, email, created_at FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        match row {
            Some(row) => row_to_user(row),
            None => Err(TrackError::NotFound(format!("User not found with id: {}", id))),
        }
    }

    /// List all users
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let rows = sqlx::query("SELECT id, name, email, created_at FROM users ORDER BY name")
            .fetch_all(&self.db)
            .await?;

        rows.into_iter().map(row_to_user).collect()
    }

    /// Update a user
    pub async fn update_user(&self, id: &str, request: UpdateUserRequest) -> Result<User> {
        let user = self.get_user(id).await?;

        validate_email(&request.email)?;

        if user.email != request.email && self.exists_by_email(&request.email).await? {
            return Err(TrackError::Duplicate(format!(
                "User already exists with email: {}",
                request.email
            )));
        }

        sqlx::query("UPDATE users SET name = ?, email = ? WHERE id = ?")
            .bind(&request.name)
            .bind(&request.email)
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(User {
            id: user.id,
            name: request.name,
            email: request.email,
            created_at: user.created_at,
        })
    }

    /// Delete a user
    pub async fn delete_user(&self, id: &str) -> Result<()> {
        self.get_user(id).await?;

        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(())
    }

    /// Find a user by email address
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query("SELECT id, name, email, created_at FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.db)
            .await?;

        row.map(row_to_user).transpose()
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool> {
        let row = sqlx::query("SELECT 1 FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.db)
            .await?;

        Ok(row.is_some())
    }
}

fn row_to_user(row: sqlx::sqlite::SqliteRow) -> Result<User> {
    let created_at_str: String = row.try_get("created_at")?;
    let created_at = DateTime::parse_from_rfc3339(&created_at_str)
        .map_err(|e| TrackError::Parse(format!("Invalid created_at date: {}", e)))?
        .with_timezone(&Utc);

    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        created_at,
    })
}
