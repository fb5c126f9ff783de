//! Follow-up reminders
//!
//! Per-email reminders with a pending/done/snoozed/overdue lifecycle and a
//! periodic sweep that flips past-due pending reminders to overdue.

pub mod manager;
pub mod sweeper;
pub mod types;

pub use manager::FollowUpManager;
pub use types::{CreateFollowUpRequest, FollowUp, FollowUpStatus, UpdateFollowUpRequest};
