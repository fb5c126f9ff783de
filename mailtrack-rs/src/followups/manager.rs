//! Follow-up manager for CRUD operations and overdue tracking

use crate::emails::EmailManager;
use crate::error::{Result, TrackError};
use crate::followups::types::{
    CreateFollowUpRequest, FollowUp, FollowUpStatus, UpdateFollowUpRequest,
};
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use std::sync::Arc;
use uuid::Uuid;

/// Manages follow-up reminders with database persistence
pub struct FollowUpManager {
    db: SqlitePool,
    emails: Arc<EmailManager>,
}

impl FollowUpManager {
    /// Create a new follow-up manager
    pub fn new(db: SqlitePool, emails: Arc<EmailManager>) -> Self {
        Self { db, emails }
    }

    /// Initialize the followups table
    pub async fn init_db(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS followups (
                id TEXT PRIMARY KEY,
                email_id TEXT NOT NULL,
                due_date TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'pending',
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_followups_email ON followups(email_id)")
            .execute(&self.db)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_followups_status ON followups(status, due_date)")
            .execute(&self.db)
            .await?;

        Ok(())
    }

    /// Create a new follow-up
    pub async fn create_followup(&self, request: CreateFollowUpRequest) -> Result<FollowUp> {
        self.emails.get_email(&request.email_id).await?;

        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let status = request.status.unwrap_or(FollowUpStatus::Pending);

        sqlx::query(
            r#"
            INSERT INTO followups (id, email_id, due_date, status, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&request.email_id)
        .bind(request.due_date.to_rfc3339())
        .bind(status.to_db_string())
        .bind(now.to_rfc3339())
        .execute(&self.db)
        .await?;

        Ok(FollowUp {
            id,
            email_id: request.email_id,
            due_date: request.due_date,
            status,
            created_at: now,
        })
    }

    /// Get a follow-up by ID
    pub async fn get_followup(&self, id: &str) -> Result<FollowUp> {
        let row = sqlx::query(
            "SELECT id, email_id, due_date, status, created_at FROM followups WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        match row {
            Some(row) => row_to_followup(row),
            None => Err(TrackError::NotFound(format!(
                "Follow-up not found with id: {}",
                id
            ))),
        }
    }

    /// List all follow-ups
    pub async fn list_followups(&self) -> Result<Vec<FollowUp>> {
        let rows = sqlx::query(
            "SELECT id, email_id, due_date, status, created_at FROM followups ORDER BY due_date",
        )
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(row_to_followup).collect()
    }

    /// List follow-ups attached to an email
    pub async fn list_followups_by_email(&self, email_id: &str) -> Result<Vec<FollowUp>> {
        self.emails.get_email(email_id).await?;

        let rows = sqlx::query(
            r#"
            SELECT id, email_id, due_date, status, created_at
            FROM followups
            WHERE email_id = ?
            ORDER BY due_date
            "#,
        )
        .bind(email_id)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(row_to_followup).collect()
    }

    /// Update a follow-up
    pub async fn update_followup(
        &self,
        id: &str,
        request: UpdateFollowUpRequest,
    ) -> Result<FollowUp> {
        let followup = self.get_followup(id).await?;

        if followup.email_id != request.email_id {
            self.emails.get_email(&request.email_id).await?;
        }

        sqlx::query("UPDATE followups SET email_id = ?, due_date = ?, status = ? WHERE id = ?")
            .bind(&request.email_id)
            .bind(request.due_date.to_rfc3339())
            .bind(request.status.to_db_string())
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(FollowUp {
            id: followup.id,
            email_id: request.email_id,
            due_date: request.due_date,
            status: request.status,
            created_at: followup.created_at,
        })
    }

    /// Set only the status of a follow-up
    pub async fn update_status(&self, id: &str, status: FollowUpStatus) -> Result<FollowUp> {
        let mut followup = self.get_followup(id).await?;

        sqlx::query("UPDATE followups SET status = ? WHERE id = ?")
            .bind(status.to_db_string())
            .bind(id)
            .execute(&self.db)
            .await?;

        followup.status = status;
        Ok(followup)
    }

    /// Delete a follow-up
    pub async fn delete_followup(&self, id: &str) -> Result<()> {
        self.get_followup(id).await?;

        sqlx::query("DELETE FROM followups WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(())
    }

    /// List follow-ups already marked overdue
    pub async fn list_overdue(&self) -> Result<Vec<FollowUp>> {
        let rows = sqlx::query(
            r#"
            SELECT id, email_id, due_date, status, created_at
            FROM followups
            WHERE status = 'overdue'
            ORDER BY due_date
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(row_to_followup).collect()
    }

    /// Flip pending follow-ups whose due date is past to overdue
    ///
    /// Returns the number of rows changed. Done and snoozed reminders are
    /// never touched.
    pub async fn mark_overdue(&self, now: DateTime<Utc>) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE followups SET status = 'overdue' WHERE status = 'pending' AND due_date < ?",
        )
        .bind(now.to_rfc3339())
        .execute(&self.db)
        .await?;

        Ok(result.rows_affected())
    }
}

fn row_to_followup(row: sqlx::sqlite::SqliteRow) -> Result<FollowUp> {
    let status_str: String = row.try_get("status")?;
    let status = FollowUpStatus::from_db_string(&status_str)
        .ok_or_else(|| TrackError::Parse(format!("Invalid follow-up status: {}", status_str)))?;

    let due_date_str: String = row.try_get("due_date")?;
    let due_date = DateTime::parse_from_rfc3339(&due_date_str)
        .map_err(|e| TrackError::Parse(format!("Invalid due_date: {}", e)))?
        .with_timezone(&Utc);

    let created_at_str: String = row.try_get("created_at")?;
    let created_at = DateTime::parse_from_rfc3339(&created_at_str)
        .map_err(|e| TrackError::Parse(format!("Invalid created_at date: {}", e)))?
        .with_timezone(&Utc);

    Ok(FollowUp {
        id: row.try_get("id")?,
        email_id: row.try_get("email_id")?,
        due_date,
        status,
        created_at,
    })
}
