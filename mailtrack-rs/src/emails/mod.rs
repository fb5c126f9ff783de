//! Tracked email store
//!
//! CRUD and archive handling for tracked emails, filtered search with
//! paging, and JSON/CSV export of a user's mailbox.

pub mod export;
pub mod manager;
pub mod types;

pub use manager::EmailManager;
pub use types::{
    CreateEmailRequest, Email, EmailPage, EmailSearchParams, Sentiment, UpdateEmailRequest,
};
