//! End-to-end tests for the assisted reply engine

use mailtrack_rs::categories::types::CreateCategoryRequest;
use mailtrack_rs::categories::CategoryManager;
use mailtrack_rs::emails::types::CreateEmailRequest;
use mailtrack_rs::emails::EmailManager;
use mailtrack_rs::reply::{self, ReplyCategory};
use mailtrack_rs::users::types::CreateUserRequest;
use mailtrack_rs::users::UserManager;
use sqlx::SqlitePool;
use std::sync::Arc;

#[tokio::test]
async fn test_draft_reply_for_stored_email() {
    let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();

    let users = Arc::new(UserManager::new(pool.clone()));
    users.init_db().await.unwrap();
    let categories = Arc::new(CategoryManager::new(pool.clone()));
    categories.init_db().await.unwrap();
    let emails = Arc::new(EmailManager::new(pool, users.clone(), categories.clone()));
    emails.init_db().await.unwrap();

    let user = users
        .create_user(CreateUserRequest {
            name: "Me".to_string(),
            email: "me@example.com".to_string(),
        })
        .await
        .unwrap();

    let category = categories
        .create_category(CreateCategoryRequest {
            name: "Inbox".to_string(),
            description: None,
        })
        .await
        .unwrap();

    let email = emails
        .create_email(CreateEmailRequest {
            user_id: user.id,
            sender: "jane.smith@example.com".to_string(),
            recipient: "me@example.com".to_string(),
            subject: "Project meeting".to_string(),
            body: "Could we talk on monday?".to_string(),
            category_id: category.id,
            sentiment: None,
        })
        .await
        .unwrap();

    // The handler composes straight from the stored fields.
    let stored = emails.get_email(&email.id).await.unwrap();
    let draft = reply::compose(&stored.subject, &stored.body, &stored.sender);

    assert_eq!(draft.subject, "Re: Project meeting");
    assert_eq!(draft.category, ReplyCategory::Meeting);
    assert!(draft.body.starts_with("Hi Jane Smith,"));
    assert!(draft.body.contains("I'd be happy to schedule a time"));
    assert!(draft.body.ends_with("Best regards,\n[Your Name]"));
}

#[test]
fn test_reply_wire_contract() {
    let draft = reply::compose("Server errors", "everything is wrong", "ops@example.com");

    let json = serde_json::to_value(&draft).unwrap();
    assert_eq!(json["subject"], "Re: Server errors");
    assert_eq!(json["type"], "complaint");
    assert_eq!(json["suggestedTone"], "Apologetic and solution-focused");
    assert!(json["body"].as_str().unwrap().starts_with("Hi Ops,"));
}

#[test]
fn test_category_priority_over_full_pipeline() {
    // Meeting outranks urgent even when both keyword sets match.
    let draft = reply::compose("urgent meeting", "need this asap", "a@b.com");
    assert_eq!(draft.category, ReplyCategory::Meeting);
    assert_eq!(draft.suggested_tone, "Professional and urgent");
}

#[test]
fn test_keyword_free_text_is_general() {
    let draft = reply::compose("greetings", "lovely weather today", "a@b.com");
    assert_eq!(draft.category, ReplyCategory::General);
    assert_eq!(draft.suggested_tone, "Professional and friendly");
}
