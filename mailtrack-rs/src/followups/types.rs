//! Follow-up types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A follow-up reminder attached to a tracked email
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowUp {
    pub id: String,
    pub email_id: String,
    pub due_date: DateTime<Utc>,
    pub status: FollowUpStatus,
    pub created_at: DateTime<Utc>,
}

/// Follow-up lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowUpStatus {
    Pending,
    Done,
    Snoozed,
    Overdue,
}

impl FollowUpStatus {
    /// Convert to database string
    pub fn to_db_string(&self) -> &'static str {
        match self {
            FollowUpStatus::Pending => "pending",
            FollowUpStatus::Done => "done",
            FollowUpStatus::Snoozed => "snoozed",
            FollowUpStatus::Overdue => "overdue",
        }
    }

    /// Parse from database string
    pub fn from_db_string(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(FollowUpStatus::Pending),
            "done" => Some(FollowUpStatus::Done),
            "snoozed" => Some(FollowUpStatus::Snoozed),
            "overdue" => Some(FollowUpStatus::Overdue),
            _ => None,
        }
    }
}

/// Request to create a new follow-up
#[derive(Debug, Deserialize)]
pub struct CreateFollowUpRequest {
    pub email_id: String,
    pub due_date: DateTime<Utc>,
    /// Defaults to pending when omitted
    pub status: Option<FollowUpStatus>,
}

/// Request to update an existing follow-up
#[derive(Debug, Deserialize)]
pub struct UpdateFollowUpRequest {
    pub email_id: String,
    pub due_date: DateTime<Utc>,
    pub status: FollowUpStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_db_round_trip() {
        for status in [
            FollowUpStatus::Pending,
            FollowUpStatus::Done,
            FollowUpStatus::Snoozed,
            FollowUpStatus::Overdue,
        ] {
            assert_eq!(
                FollowUpStatus::from_db_string(status.to_db_string()),
                Some(status)
            );
        }
        assert_eq!(FollowUpStatus::from_db_string("lost"), None);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&FollowUpStatus::Snoozed).unwrap(),
            "\"snoozed\""
        );
        let parsed: FollowUpStatus = serde_json::from_str("\"overdue\"").unwrap();
        assert_eq!(parsed, FollowUpStatus::Overdue);
    }
}
