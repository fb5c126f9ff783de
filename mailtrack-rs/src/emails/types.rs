//! Email types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked email
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Email {
    pub id: String,
    pub user_id: String,
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub category_id: String,
    pub sentiment: Option<Sentiment>,
    pub archived: bool,
    pub received_at: DateTime<Utc>,
}

/// Sentiment recorded for an email
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Convert to database string
    pub fn to_db_string(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Parse from database string
    pub fn from_db_string(s: &str) -> Option<Self> {
        match s {
            "positive" => Some(Sentiment::Positive),
            "negative" => Some(Sentiment::Negative),
            "neutral" => Some(Sentiment::Neutral),
            _ => None,
        }
    }
}

/// Request to create a new email record
#[derive(Debug, Deserialize)]
pub struct CreateEmailRequest {
    pub user_id: String,
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    #[serde(default)]
    pub body: String,
    pub category_id: String,
    pub sentiment: Option<Sentiment>,
}

/// Request to update an existing email record
#[derive(Debug, Deserialize)]
pub struct UpdateEmailRequest {
    pub user_id: String,
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    #[serde(default)]
    pub body: String,
    pub category_id: String,
    pub sentiment: Option<Sentiment>,
    pub archived: bool,
}

/// Search filters and paging for the email search endpoint
#[derive(Debug, Deserialize)]
pub struct EmailSearchParams {
    pub sender: Option<String>,
    pub recipient: Option<String>,
    pub subject: Option<String>,
    pub category_id: Option<String>,
    pub sentiment: Option<Sentiment>,
    pub archived: Option<bool>,
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub size: u32,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    #[serde(default = "default_sort_dir")]
    pub sort_dir: String,
}

impl Default for EmailSearchParams {
    fn default() -> Self {
        Self {
            sender: None,
            recipient: None,
            subject: None,
            category_id: None,
            sentiment: None,
            archived: None,
            page: 0,
            size: default_page_size(),
            sort_by: default_sort_by(),
            sort_dir: default_sort_dir(),
        }
    }
}

fn default_page_size() -> u32 {
    10
}

fn default_sort_by() -> String {
    "received_at".to_string()
}

fn default_sort_dir() -> String {
    "desc".to_string()
}

/// One page of search results
#[derive(Debug, Serialize)]
pub struct EmailPage {
    pub emails: Vec<Email>,
    pub total: i64,
    pub page: u32,
    pub size: u32,
    pub total_pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_db_round_trip() {
        for sentiment in [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral] {
            assert_eq!(
                Sentiment::from_db_string(sentiment.to_db_string()),
                Some(sentiment)
            );
        }
        assert_eq!(Sentiment::from_db_string("angry"), None);
    }

    #[test]
    fn test_search_param_defaults() {
        let params: EmailSearchParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.page, 0);
        assert_eq!(params.size, 10);
        assert_eq!(params.sort_by, "received_at");
        assert_eq!(params.sort_dir, "desc");
    }
}
