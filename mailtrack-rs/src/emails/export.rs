//! Mailbox export
//!
//! Serializes a user's emails for download as JSON or CSV.

use crate::emails::types::Email;
use crate::error::{Result, TrackError};

/// Export emails as a pretty-printed JSON array
pub fn export_json(emails: &[Email]) -> Result<String> {
    Ok(serde_json::to_string_pretty(emails)?)
}

/// Export emails as CSV with a header row
pub fn export_csv(emails: &[Email]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record([
            "ID",
            "Sender",
            "Recipient",
            "Subject",
            "Body",
            "Sentiment",
            "Archived",
            "Received At",
        ])
        .map_err(|e| TrackError::Export(e.to_string()))?;

    for email in emails {
        let received_at = email.received_at.to_rfc3339();
        writer
            .write_record([
                email.id.as_str(),
                email.sender.as_str(),
                email.recipient.as_str(),
                email.subject.as_str(),
                email.body.as_str(),
                email.sentiment.map(|s| s.to_db_string()).unwrap_or(""),
                if email.archived { "true" } else { "false" },
                received_at.as_str(),
            ])
            .map_err(|e| TrackError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TrackError::Export(e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| TrackError::Export(e.to_string()))
}
