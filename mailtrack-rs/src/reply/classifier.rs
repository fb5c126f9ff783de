//! Keyword scans over inbound message content
//!
//! Two independent scans run over the same lowercased `subject + " " + body`
//! text: one picks the reply category, one suggests a tone. Their keyword
//! sets and priority orders differ and must stay separate; unifying them
//! would change observable output for messages that hit one list but not
//! the other (e.g. "critical" is an urgent category keyword but not an
//! urgent tone keyword).

use crate::reply::types::ReplyCategory;

const MEETING_KEYWORDS: &[&str] = &["meeting", "schedule", "appointment", "call", "conference"];
const INQUIRY_KEYWORDS: &[&str] = &[
    "question", "ask", "inquiry", "help", "how", "what", "when", "where", "why",
];
const REQUEST_KEYWORDS: &[&str] = &["request", "need", "require", "please", "could you", "would you"];
const COMPLAINT_KEYWORDS: &[&str] = &["problem", "issue", "complaint", "error", "wrong", "not working"];
const APPRECIATION_KEYWORDS: &[&str] = &["thank", "thanks", "appreciate", "grateful"];
const FOLLOWUP_KEYWORDS: &[&str] = &["follow up", "follow-up", "checking", "status", "update"];
const URGENT_KEYWORDS: &[&str] = &["urgent", "asap", "immediately", "emergency", "critical"];

const URGENT_TONE_KEYWORDS: &[&str] = &["urgent", "asap", "immediately", "emergency"];
const APPRECIATIVE_TONE_KEYWORDS: &[&str] = &["thank", "thanks", "appreciate"];
const APOLOGETIC_TONE_KEYWORDS: &[&str] = &["problem", "issue", "complaint", "error"];
const COLLABORATIVE_TONE_KEYWORDS: &[&str] = &["meeting", "schedule", "collaboration"];

/// Classify a message into a reply category
///
/// Categories are tested in a fixed priority order and the first match
/// wins. Matching is a plain substring test, not whole-word: "statuses"
/// matches "status". Messages that hit no list are `General`.
pub fn classify(subject: &str, body: &str) -> ReplyCategory {
    let content = format!("{} {}", subject, body).to_lowercase();

    if contains_any(&content, MEETING_KEYWORDS) {
        return ReplyCategory::Meeting;
    }

    if contains_any(&content, INQUIRY_KEYWORDS) {
        return ReplyCategory::Inquiry;
    }

    if contains_any(&content, REQUEST_KEYWORDS) {
        return ReplyCategory::Request;
    }

    if contains_any(&content, COMPLAINT_KEYWORDS) {
        return ReplyCategory::Complaint;
    }

    if contains_any(&content, APPRECIATION_KEYWORDS) {
        return ReplyCategory::Appreciation;
    }

    if contains_any(&content, FOLLOWUP_KEYWORDS) {
        return ReplyCategory::Followup;
    }

    if contains_any(&content, URGENT_KEYWORDS) {
        return ReplyCategory::Urgent;
    }

    ReplyCategory::General
}

/// Suggest a writing tone for the drafted reply
///
/// Runs its own scan with its own keyword sets and order; it may disagree
/// with `classify` for the same message.
pub fn suggested_tone(subject: &str, body: &str) -> &'static str {
    let content = format!("{} {}", subject, body).to_lowercase();

    if contains_any(&content, URGENT_TONE_KEYWORDS) {
        return "Professional and urgent";
    }

    if contains_any(&content, APPRECIATIVE_TONE_KEYWORDS) {
        return "Warm and appreciative";
    }

    if contains_any(&content, APOLOGETIC_TONE_KEYWORDS) {
        return "Apologetic and solution-focused";
    }

    if contains_any(&content, COLLABORATIVE_TONE_KEYWORDS) {
        return "Professional and collaborative";
    }

    "Professional and friendly"
}

fn contains_any(content: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| content.contains(keyword))
}
