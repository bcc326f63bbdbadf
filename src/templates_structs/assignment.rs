use askama::Template;

use super::PageContext;

/// A member's line in the submission checklist.
pub struct SubmissionRow {
    pub member_id: String,
    pub name: String,
    pub known: bool,
    pub submitted: bool,
}

#[derive(Template)]
#[template(path = "assignment.html")]
pub struct AssignmentTemplate {
    pub ctx: PageContext,
    pub week_label: String,
    pub deadline: String,
    pub rows: Vec<SubmissionRow>,
    pub rate: u32,
    pub notice: Option<String>,
    pub errors: Vec<String>,
    pub message: Option<String>,
    pub webhook_configured: bool,
}
