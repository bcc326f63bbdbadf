//! Attendance/submission reconciliation and notice text generation.
//!
//! `summary` buckets session records by status, `render` turns a summary
//! into the text posted to the team channel, and `finalize` commits a
//! closed session into the members' persistent counters.

pub mod finalize;
pub mod render;
pub mod summary;

pub use finalize::{FinalizePlan, FinalizeReport, MemberOutcome};
pub use render::{Closing, assignment_notice, meeting_minutes};
pub use summary::{AttendanceSummary, SubmissionSummary, submission_rate};

use crate::models::assignment::Assignment;
use crate::models::meeting::Meeting;
use crate::models::member::Member;

/// Minutes for a meeting session against the given roster.
pub fn minutes_for(meeting: &Meeting, members: &[Member], team_name: &str, content: &str) -> String {
    let summary = AttendanceSummary::new(&meeting.records, members);
    meeting_minutes(team_name, meeting.date, &summary, content)
}

/// Status notice for an assignment session against the given roster.
pub fn notice_for(assignment: &Assignment, members: &[Member], team_name: &str) -> String {
    let summary = SubmissionSummary::new(&assignment.records, members);
    assignment_notice(team_name, assignment.week_label(), assignment.deadline_label(), &summary)
}
