//! Reply composition
//!
//! Assembles the drafted subject, body and tone for a classified message.
//! The prose blocks are fixed, hand-authored paragraphs; composition is
//! deterministic, so identical inputs always produce identical drafts.

use crate::reply::classifier::{classify, suggested_tone};
use crate::reply::name::extract_name;
use crate::reply::types::{GeneratedReply, ReplyCategory};

/// Body phrases that indicate the sender is already proposing a time slot
const SCHEDULING_HINTS: &[&str] = &[
    "tomorrow",
    "next week",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
];

/// Draft a reply for an inbound message
pub fn compose(subject: &str, body: &str, sender_email: &str) -> GeneratedReply {
    let name = extract_name(sender_email);
    let category = classify(subject, body);

    GeneratedReply {
        subject: reply_subject(subject),
        body: reply_body(body, &name, category),
        category,
        suggested_tone: suggested_tone(subject, body).to_string(),
    }
}

/// Prefix the subject with "Re: " unless it already carries one
fn reply_subject(subject: &str) -> String {
    if subject.to_lowercase().starts_with("re:") {
        subject.to_string()
    } else {
        format!("Re: {}", subject)
    }
}

fn reply_body(body: &str, name: &str, category: ReplyCategory) -> String {
    format!(
        "Hi {},\n\n{}\n\nBest regards,\n[Your Name]",
        name,
        category_prose(body, category)
    )
}

fn category_prose(body: &str, category: ReplyCategory) -> &'static str {
    match category {
        ReplyCategory::Meeting => meeting_prose(body),
        ReplyCategory::Inquiry => {
            "Thank you for your question. I appreciate you taking the time to reach out. \
             I'll need to gather some additional information to provide you with the most accurate response. \
             Could you please provide more details about [specific aspect]? \
             I'll get back to you with a comprehensive answer as soon as possible."
        }
        ReplyCategory::Request => {
            "Thank you for your request. I've received your message and I'm currently reviewing the details. \
             I'll need to check our current capacity and requirements to provide you with the most accurate response. \
             I'll get back to you within [timeframe] with an update on your request."
        }
        ReplyCategory::Complaint => {
            "I sincerely apologize for any inconvenience this may have caused. \
             I take your feedback very seriously and want to ensure we resolve this matter promptly. \
             I'm currently investigating the issue and will provide you with a detailed response and solution within [timeframe]. \
             Thank you for bringing this to our attention."
        }
        ReplyCategory::Appreciation => {
            "You're very welcome! I'm delighted to hear that I could be of help. \
             It's always a pleasure to work with you, and I appreciate you taking the time to share your kind words. \
             Please don't hesitate to reach out if you need any further assistance."
        }
        ReplyCategory::Followup => {
            "Thank you for following up. I appreciate your patience and want to provide you with a current status update. \
             I'm currently working on [specific task/project] and expect to have more information for you by [date]. \
             I'll keep you posted on any developments and will reach out as soon as I have updates to share."
        }
        ReplyCategory::Urgent => {
            "I understand this is urgent and I'm prioritizing your request immediately. \
             I'm currently reviewing the situation and will provide you with a response as soon as possible. \
             If this requires immediate attention, please don't hesitate to call me directly at [phone number]. \
             I'll do everything I can to address this promptly."
        }
        ReplyCategory::General => {
            "Thank you for your email. I've received your message and I'm currently reviewing the contents. \
             I appreciate you reaching out and I'll get back to you with a detailed response as soon as possible. \
             If you have any urgent matters, please don't hesitate to contact me directly."
        }
    }
}

/// Meeting replies branch on whether the body already proposes a time
fn meeting_prose(body: &str) -> &'static str {
    let body = body.to_lowercase();
    if SCHEDULING_HINTS.iter().any(|hint| body.contains(hint)) {
        "Thank you for reaching out regarding the meeting. I'd be happy to schedule a time to discuss this further. \
         Please let me know your availability and I'll do my best to accommodate your schedule.\n\n\
         I look forward to our conversation."
    } else {
        "Thank you for the meeting invitation. I appreciate you reaching out and would be interested in discussing this further. \
         Could you please provide more details about the agenda and your preferred time slots?"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_subject_prefixed() {
        let reply = compose("Hi", "", "a@b.com");
        assert_eq!(reply.subject, "Re: Hi");
    }

    #[test]
    fn test_reply_subject_unchanged_when_already_a_reply() {
        assert_eq!(compose("Re: Hi", "", "a@b.com").subject, "Re: Hi");
        assert_eq!(compose("RE: hi", "", "a@b.com").subject, "RE: hi");
        assert_eq!(compose("re: hi", "", "a@b.com").subject, "re: hi");
    }

    #[test]
    fn test_body_frame() {
        let reply = compose("Hello", "", "john.doe@example.com");
        assert!(reply.body.starts_with("Hi John Doe,\n\n"));
        assert!(reply.body.ends_with("\n\nBest regards,\n[Your Name]"));
    }

    #[test]
    fn test_greeting_falls_back_to_there() {
        let reply = compose("Hello", "", "");
        assert!(reply.body.starts_with("Hi there,\n\n"));
    }

    #[test]
    fn test_meeting_scheduling_branch() {
        let reply = compose("Meeting", "can we meet on monday?", "a@b.com");
        assert_eq!(reply.category, ReplyCategory::Meeting);
        assert!(reply.body.contains("I'd be happy to schedule a time"));
        assert!(reply.body.contains("I look forward to our conversation."));
    }

    #[test]
    fn test_meeting_generic_branch() {
        let reply = compose("Meeting", "shall we sync sometime?", "a@b.com");
        assert_eq!(reply.category, ReplyCategory::Meeting);
        assert!(reply.body.contains("Thank you for the meeting invitation."));
        assert!(reply.body.contains("agenda and your preferred time slots?"));
    }

    #[test]
    fn test_weekend_names_do_not_trigger_scheduling_branch() {
        let reply = compose("Meeting", "how about saturday or sunday?", "a@b.com");
        assert!(reply.body.contains("Thank you for the meeting invitation."));
    }

    #[test]
    fn test_empty_message_is_general_and_friendly() {
        let reply = compose("", "", "a@b.com");
        assert_eq!(reply.category, ReplyCategory::General);
        assert_eq!(reply.suggested_tone, "Professional and friendly");
        assert!(reply.body.contains("Thank you for your email."));
    }

    #[test]
    fn test_compose_is_idempotent() {
        let first = compose("Urgent: server down", "the api is not working", "ops@example.com");
        let second = compose("Urgent: server down", "the api is not working", "ops@example.com");
        assert_eq!(first.subject, second.subject);
        assert_eq!(first.body, second.body);
        assert_eq!(first.category, second.category);
        assert_eq!(first.suggested_tone, second.suggested_tone);
    }

    #[test]
    fn test_category_and_tone_computed_independently() {
        // Meeting category, urgent tone.
        let reply = compose("meeting asap", "", "a@b.com");
        assert_eq!(reply.category, ReplyCategory::Meeting);
        assert_eq!(reply.suggested_tone, "Professional and urgent");
    }
}
