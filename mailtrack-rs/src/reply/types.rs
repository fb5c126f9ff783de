//! Reply engine types

use serde::{Deserialize, Serialize};

/// Inferred intent of an inbound message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyCategory {
    Meeting,
    Inquiry,
    Request,
    Complaint,
    Appreciation,
    Followup,
    Urgent,
    General,
}

impl ReplyCategory {
    /// Category name as exposed on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyCategory::Meeting => "meeting",
            ReplyCategory::Inquiry => "inquiry",
            ReplyCategory::Request => "request",
            ReplyCategory::Complaint => "complaint",
            ReplyCategory::Appreciation => "appreciation",
            ReplyCategory::Followup => "followup",
            ReplyCategory::Urgent => "urgent",
            ReplyCategory::General => "general",
        }
    }
}

/// A drafted reply
///
/// The `type` and `suggestedTone` spellings are kept from the original
/// HTTP contract; existing clients match on them.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedReply {
    pub subject: String,
    pub body: String,
    #[serde(rename = "type")]
    pub category: ReplyCategory,
    #[serde(rename = "suggestedTone")]
    pub suggested_tone: String,
}

/// Request to draft a reply from raw content
#[derive(Debug, Deserialize)]
pub struct GenerateReplyRequest {
    pub subject: String,
    pub body: String,
    pub sender_email: String,
}
