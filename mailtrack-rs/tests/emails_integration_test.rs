//! Integration tests for the tracked email store

use mailtrack_rs::categories::types::CreateCategoryRequest;
use mailtrack_rs::categories::CategoryManager;
use mailtrack_rs::emails::types::{
    CreateEmailRequest, EmailSearchParams, Sentiment, UpdateEmailRequest,
};
use mailtrack_rs::emails::EmailManager;
use mailtrack_rs::error::TrackError;
use mailtrack_rs::users::types::CreateUserRequest;
use mailtrack_rs::users::UserManager;
use sqlx::SqlitePool;
use std::sync::Arc;

struct Fixture {
    emails: Arc<EmailManager>,
    user_id: String,
    category_id: String,
}

/// In-memory database seeded with one user and one category
async fn setup() -> Fixture {
    let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();

    let users = Arc::new(UserManager::new(pool.clone()));
    users.init_db().await.unwrap();

    let categories = Arc::new(CategoryManager::new(pool.clone()));
    categories.init_db().await.unwrap();

    let emails = Arc::new(EmailManager::new(pool, users.clone(), categories.clone()));
    emails.init_db().await.unwrap();

    let user = users
        .create_user(CreateUserRequest {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        })
        .await
        .unwrap();

    let category = categories
        .create_category(CreateCategoryRequest {
            name: "Work".to_string(),
            description: None,
        })
        .await
        .unwrap();

    Fixture {
        emails,
        user_id: user.id,
        category_id: category.id,
    }
}

fn email_request(fixture: &Fixture, sender: &str, subject: &str) -> CreateEmailRequest {
    CreateEmailRequest {
        user_id: fixture.user_id.clone(),
        sender: sender.to_string(),
        recipient: "me@example.com".to_string(),
        subject: subject.to_string(),
        body: "body".to_string(),
        category_id: fixture.category_id.clone(),
        sentiment: Some(Sentiment::Neutral),
    }
}

#[tokio::test]
async fn test_create_and_get_email() {
    let fixture = setup().await;

    let created = fixture
        .emails
        .create_email(email_request(&fixture, "alice@example.com", "Hello"))
        .await
        .unwrap();

    assert!(!created.archived);
    assert_eq!(created.sentiment, Some(Sentiment::Neutral));

    let fetched = fixture.emails.get_email(&created.id).await.unwrap();
    assert_eq!(fetched.subject, "Hello");
    assert_eq!(fetched.sender, "alice@example.com");
}

#[tokio::test]
async fn test_create_email_requires_known_user_and_category() {
    let fixture = setup().await;

    let mut request = email_request(&fixture, "a@b.com", "x");
    request.user_id = "missing".to_string();
    let result = fixture.emails.create_email(request).await;
    assert!(matches!(result, Err(TrackError::NotFound(_))));

    let mut request = email_request(&fixture, "a@b.com", "x");
    request.category_id = "missing".to_string();
    let result = fixture.emails.create_email(request).await;
    assert!(matches!(result, Err(TrackError::NotFound(_))));
}

#[tokio::test]
async fn test_update_email() {
    let fixture = setup().await;

    let created = fixture
        .emails
        .create_email(email_request(&fixture, "alice@example.com", "Before"))
        .await
        .unwrap();

    let updated = fixture
        .emails
        .update_email(
            &created.id,
            UpdateEmailRequest {
                user_id: fixture.user_id.clone(),
                sender: "alice@example.com".to_string(),
                recipient: "me@example.com".to_string(),
                subject: "After".to_string(),
                body: "new body".to_string(),
                category_id: fixture.category_id.clone(),
                sentiment: Some(Sentiment::Positive),
                archived: true,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.subject, "After");
    assert_eq!(updated.sentiment, Some(Sentiment::Positive));
    assert!(updated.archived);
    assert_eq!(updated.received_at, created.received_at);
}

#[tokio::test]
async fn test_archive_and_unarchive() {
    let fixture = setup().await;

    let created = fixture
        .emails
        .create_email(email_request(&fixture, "alice@example.com", "Hello"))
        .await
        .unwrap();

    let archived = fixture.emails.archive_email(&created.id).await.unwrap();
    assert!(archived.archived);

    let unarchived = fixture.emails.unarchive_email(&created.id).await.unwrap();
    assert!(!unarchived.archived);
}

#[tokio::test]
async fn test_delete_email() {
    let fixture = setup().await;

    let created = fixture
        .emails
        .create_email(email_request(&fixture, "alice@example.com", "Hello"))
        .await
        .unwrap();

    fixture.emails.delete_email(&created.id).await.unwrap();

    let result = fixture.emails.get_email(&created.id).await;
    assert!(matches!(result, Err(TrackError::NotFound(_))));
}

#[tokio::test]
async fn test_list_by_user_validates_user() {
    let fixture = setup().await;

    let result = fixture.emails.list_emails_by_user("missing").await;
    assert!(matches!(result, Err(TrackError::NotFound(_))));

    let listed = fixture
        .emails
        .list_emails_by_user(&fixture.user_id)
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_search_substring_filter_is_case_insensitive() {
    let fixture = setup().await;

    fixture
        .emails
        .create_email(email_request(&fixture, "Alice@Example.com", "Quarterly report"))
        .await
        .unwrap();
    fixture
        .emails
        .create_email(email_request(&fixture, "bob@example.com", "Lunch"))
        .await
        .unwrap();

    let params = EmailSearchParams {
        sender: Some("ALICE".to_string()),
        ..Default::default()
    };

    let page = fixture.emails.search_emails(&params).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.emails[0].sender, "Alice@Example.com");
}

#[tokio::test]
async fn test_search_by_archived_flag() {
    let fixture = setup().await;

    let kept = fixture
        .emails
        .create_email(email_request(&fixture, "a@example.com", "keep"))
        .await
        .unwrap();
    let archived = fixture
        .emails
        .create_email(email_request(&fixture, "b@example.com", "old"))
        .await
        .unwrap();
    fixture.emails.archive_email(&archived.id).await.unwrap();

    let params = EmailSearchParams {
        archived: Some(false),
        ..Default::default()
    };

    let page = fixture.emails.search_emails(&params).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.emails[0].id, kept.id);
}

#[tokio::test]
async fn test_search_paging() {
    let fixture = setup().await;

    for i in 0..5 {
        fixture
            .emails
            .create_email(email_request(
                &fixture,
                &format!("sender{}@example.com", i),
                &format!("mail {}", i),
            ))
            .await
            .unwrap();
    }

    let params = EmailSearchParams {
        size: 2,
        sort_by: "sender".to_string(),
        sort_dir: "asc".to_string(),
        ..Default::default()
    };

    let page = fixture.emails.search_emails(&params).await.unwrap();
    assert_eq!(page.total, 5);
    assert_eq!(page.emails.len(), 2);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.emails[0].sender, "sender0@example.com");

    let params = EmailSearchParams {
        page: 2,
        size: 2,
        sort_by: "sender".to_string(),
        sort_dir: "asc".to_string(),
        ..Default::default()
    };

    let last = fixture.emails.search_emails(&params).await.unwrap();
    assert_eq!(last.emails.len(), 1);
    assert_eq!(last.emails[0].sender, "sender4@example.com");
}

#[tokio::test]
async fn test_search_unknown_sort_column_falls_back() {
    let fixture = setup().await;

    fixture
        .emails
        .create_email(email_request(&fixture, "a@example.com", "x"))
        .await
        .unwrap();

    let params = EmailSearchParams {
        sort_by: "no_such_column".to_string(),
        ..Default::default()
    };

    // Must not error; falls back to received_at ordering.
    let page = fixture.emails.search_emails(&params).await.unwrap();
    assert_eq!(page.total, 1);
}
