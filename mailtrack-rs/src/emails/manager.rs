//! Email manager for CRUD, archiving and search

use crate::categories::CategoryManager;
use crate::emails::types::{
    CreateEmailRequest, Email, EmailPage, EmailSearchParams, Sentiment, UpdateEmailRequest,
};
use crate::error::{Result, TrackError};
use crate::users::UserManager;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use std::sync::Arc;
use uuid::Uuid;

const EMAIL_COLUMNS: &str =
    "id, user_id, sender, recipient, subject, body, category_id, sentiment, archived, received_at";

/// Sortable columns; anything else falls back to received_at
const SORTABLE_COLUMNS: &[&str] = &["sender", "recipient", "subject", "received_at"];

/// Dynamically bound search parameter
enum BindValue {
    Text(String),
    Flag(bool),
}

/// Manages tracked emails with database persistence
pub struct EmailManager {
    db: SqlitePool,
    users: Arc<UserManager>,
    categories: Arc<CategoryManager>,
}

impl EmailManager {
    /// Create a new email manager
    pub fn new(db: SqlitePool, users: Arc<UserManager>, categories: Arc<CategoryManager>) -> Self {
        Self {
            db,
            users,
            categories,
        }
    }

    /// Initialize the emails table
    pub async fn init_db(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS emails (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                sender TEXT NOT NULL,
                recipient TEXT NOT NULL,
                subject TEXT NOT NULL,
                body TEXT NOT NULL DEFAULT '',
                category_id TEXT NOT NULL,
                sentiment TEXT,
                archived BOOLEAN NOT NULL DEFAULT 0,
                received_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_emails_user ON emails(user_id)")
            .execute(&self.db)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_emails_category ON emails(category_id)")
            .execute(&self.db)
            .await?;

        Ok(())
    }

    /// Create a new email record
    pub async fn create_email(&self, request: CreateEmailRequest) -> Result<Email> {
        self.users.get_user(&request.user_id).await?;
        self.categories.get_category(&request.category_id).await?;

        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO emails (id, user_id, sender, recipient, subject, body,
                                category_id, sentiment, archived, received_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&request.user_id)
        .bind(&request.sender)
        .bind(&request.recipient)
        .bind(&request.subject)
        .bind(&request.body)
        .bind(&request.category_id)
        .bind(request.sentiment.map(|s| s.to_db_string()))
        .bind(false)
        .bind(now.to_rfc3339())
        .execute(&self.db)
        .await?;

        Ok(Email {
            id,
            user_id: request.user_id,
            sender: request.sender,
            recipient: request.recipient,
            subject: request.subject,
            body: request.body,
            category_id: request.category_id,
            sentiment: request.sentiment,
            archived: false,
            received_at: now,
        })
    }

    /// Get an email by ID
    pub async fn get_email(&self, id: &str) -> Result<Email> {
        let row = sqlx::query(&format!("SELECT {} FROM emails WHERE id = ?", EMAIL_COLUMNS))
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        match row {
            Some(row) => row_to_email(row),
            None => Err(TrackError::NotFound(format!(
                "Email not found with id: {}",
                id
            ))),
        }
    }

    /// List all emails
    pub async fn list_emails(&self) -> Result<Vec<Email>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM emails ORDER BY received_at DESC",
            EMAIL_COLUMNS
        ))
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(row_to_email).collect()
    }

    /// List emails belonging to a user
    pub async fn list_emails_by_user(&self, user_id: &str) -> Result<Vec<Email>> {
        self.users.get_user(user_id).await?;

        let rows = sqlx::query(&format!(
            "SELECT {} FROM emails WHERE user_id = ? ORDER BY received_at DESC",
            EMAIL_COLUMNS
        ))
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(row_to_email).collect()
    }

    /// Update an email record
    pub async fn update_email(&self, id: &str, request: UpdateEmailRequest) -> Result<Email> {
        let email = self.get_email(id).await?;

        if email.user_id != request.user_id {
            self.users.get_user(&request.user_id).await?;
        }

        if email.category_id != request.category_id {
            self.categories.get_category(&request.category_id).await?;
        }

        sqlx::query(
            r#"
            UPDATE emails
            SET user_id = ?, sender = ?, recipient = ?, subject = ?, body = ?,
                category_id = ?, sentiment = ?, archived = ?
            WHERE id = ?
            "#,
        )
        .bind(&request.user_id)
        .bind(&request.sender)
        .bind(&request.recipient)
        .bind(&request.subject)
        .bind(&request.body)
        .bind(&request.category_id)
        .bind(request.sentiment.map(|s| s.to_db_string()))
        .bind(request.archived)
        .bind(id)
        .execute(&self.db)
        .await?;

        Ok(Email {
            id: email.id,
            user_id: request.user_id,
            sender: request.sender,
            recipient: request.recipient,
            subject: request.subject,
            body: request.body,
            category_id: request.category_id,
            sentiment: request.sentiment,
            archived: request.archived,
            received_at: email.received_at,
        })
    }

    /// Delete an email record
    pub async fn delete_email(&self, id: &str) -> Result<()> {
        self.get_email(id).await?;

        sqlx::query("DELETE FROM emails WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(())
    }

    /// Mark an email as archived
    pub async fn archive_email(&self, id: &str) -> Result<Email> {
        self.set_archived(id, true).await
    }

    /// Clear an email's archived flag
    pub async fn unarchive_email(&self, id: &str) -> Result<Email> {
        self.set_archived(id, false).await
    }

    async fn set_archived(&self, id: &str, archived: bool) -> Result<Email> {
        let mut email = self.get_email(id).await?;

        sqlx::query("UPDATE emails SET archived = ? WHERE id = ?")
            .bind(archived)
            .bind(id)
            .execute(&self.db)
            .await?;

        email.archived = archived;
        Ok(email)
    }

    /// Search emails with optional filters, paging and sorting
    ///
    /// Text filters are case-insensitive substring matches. Unknown sort
    /// columns fall back to received_at so the endpoint stays total.
    pub async fn search_emails(&self, params: &EmailSearchParams) -> Result<EmailPage> {
        let mut conditions: Vec<&str> = Vec::new();
        let mut binds: Vec<BindValue> = Vec::new();

        if let Some(sender) = &params.sender {
            conditions.push("LOWER(sender) LIKE '%' || LOWER(?) || '%'");
            binds.push(BindValue::Text(sender.clone()));
        }
        if let Some(recipient) = &params.recipient {
            conditions.push("LOWER(recipient) LIKE '%' || LOWER(?) || '%'");
            binds.push(BindValue::Text(recipient.clone()));
        }
        if let Some(subject) = &params.subject {
            conditions.push("LOWER(subject) LIKE '%' || LOWER(?) || '%'");
            binds.push(BindValue::Text(subject.clone()));
        }
        if let Some(category_id) = &params.category_id {
            conditions.push("category_id = ?");
            binds.push(BindValue::Text(category_id.clone()));
        }
        if let Some(sentiment) = params.sentiment {
            conditions.push("sentiment = ?");
            binds.push(BindValue::Text(sentiment.to_db_string().to_string()));
        }
        if let Some(archived) = params.archived {
            conditions.push("archived = ?");
            binds.push(BindValue::Flag(archived));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        let count_query = format!("SELECT COUNT(*) AS total FROM emails{}", where_clause);
        let mut count = sqlx::query(&count_query);
        for bind in &binds {
            count = match bind {
                BindValue::Text(value) => count.bind(value),
                BindValue::Flag(value) => count.bind(value),
            };
        }
        let total: i64 = count.fetch_one(&self.db).await?.try_get("total")?;

        let size = params.size.max(1);
        let select_query = format!(
            "SELECT {} FROM emails{} ORDER BY {} {} LIMIT ? OFFSET ?",
            EMAIL_COLUMNS,
            where_clause,
            sort_column(&params.sort_by),
            sort_direction(&params.sort_dir),
        );

        let mut select = sqlx::query(&select_query);
        for bind in &binds {
            select = match bind {
                BindValue::Text(value) => select.bind(value),
                BindValue::Flag(value) => select.bind(value),
            };
        }
        select = select
            .bind(i64::from(size))
            .bind(i64::from(params.page) * i64::from(size));

        let rows = select.fetch_all(&self.db).await?;
        let emails: Vec<Email> = rows.into_iter().map(row_to_email).collect::<Result<_>>()?;

        let total_pages = ((total + i64::from(size) - 1) / i64::from(size)) as u32;

        Ok(EmailPage {
            emails,
            total,
            page: params.page,
            size,
            total_pages,
        })
    }
}

fn sort_column(requested: &str) -> &'static str {
    SORTABLE_COLUMNS
        .iter()
        .find(|column| **column == requested)
        .copied()
        .unwrap_or("received_at")
}

fn sort_direction(requested: &str) -> &'static str {
    if requested.eq_ignore_ascii_case("desc") {
        "DESC"
    } else {
        "ASC"
    }
}

fn row_to_email(row: sqlx::sqlite::SqliteRow) -> Result<Email> {
    let sentiment: Option<String> = row.try_get("sentiment")?;
    let sentiment = match sentiment {
        Some(value) => Some(
            Sentiment::from_db_string(&value)
                .ok_or_else(|| TrackError::Parse(format!("Invalid sentiment: {}", value)))?,
        ),
        None => None,
    };

    let received_at_str: String = row.try_get("received_at")?;
    let received_at = DateTime::parse_from_rfc3339(&received_at_str)
        .map_err(|e| TrackError::Parse(format!("Invalid received_at date: {}", e)))?
        .with_timezone(&Utc);

    Ok(Email {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        sender: row.try_get("sender")?,
        recipient: row.try_get("recipient")?,
        subject: row.try_get("subject")?,
        body: row.try_get("body")?,
        category_id: row.try_get("category_id")?,
        sentiment,
        archived: row.try_get("archived")?,
        received_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_column_whitelist() {
        assert_eq!(sort_column("sender"), "sender");
        assert_eq!(sort_column("subject"), "subject");
        assert_eq!(sort_column("received_at"), "received_at");
        assert_eq!(sort_column("id; DROP TABLE emails"), "received_at");
        assert_eq!(sort_column(""), "received_at");
    }

    #[test]
    fn test_sort_direction() {
        assert_eq!(sort_direction("desc"), "DESC");
        assert_eq!(sort_direction("DESC"), "DESC");
        assert_eq!(sort_direction("asc"), "ASC");
        assert_eq!(sort_direction("sideways"), "ASC");
    }
}
