use askama::Template;

use crate::models::meeting::AttendanceStatus;
use super::PageContext;

/// One radio choice in the attendance grid.
pub struct StatusOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl StatusOption {
    pub fn attendance() -> Vec<StatusOption> {
        AttendanceStatus::ALL
            .into_iter()
            .map(|s| StatusOption { value: s.as_str(), label: s.label() })
            .collect()
    }
}

/// A member's line in the attendance grid. Rows for members deleted since
/// the session opened are kept as hidden fields only.
pub struct AttendanceRow {
    pub member_id: String,
    pub name: String,
    pub known: bool,
    pub status: &'static str,
}

#[derive(Template)]
#[template(path = "meeting.html")]
pub struct MeetingTemplate {
    pub ctx: PageContext,
    pub date: String,
    pub rows: Vec<AttendanceRow>,
    pub statuses: Vec<StatusOption>,
    pub notes: String,
    pub minutes: Option<String>,
    pub errors: Vec<String>,
    pub message: Option<String>,
    pub webhook_configured: bool,
}
