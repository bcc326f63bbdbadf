use chrono::NaiveDate;

use super::summary::{AttendanceSummary, SubmissionSummary};
use crate::models::meeting::AttendanceStatus;

/// Placeholder for an empty name list.
pub const EMPTY_LIST: &str = "-";
/// Shown in place of the outstanding list when everyone has submitted.
pub const EVERYONE_SUBMITTED: &str = "None (everyone has submitted! 🎉)";

/// Closing line of an assignment notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closing {
    Outstanding = 0,
    AllSubmitted = 1,
}

const CLOSING_MESSAGES: [(Closing, &str); 2] = [
    (Closing::Outstanding, "Please make sure to submit before the deadline! 🙏"),
    (Closing::AllSubmitted, "Great work this week, everyone! Let's keep it up next week! 💪"),
];

impl Closing {
    pub fn select(all_submitted: bool) -> Self {
        if all_submitted { Closing::AllSubmitted } else { Closing::Outstanding }
    }

    pub fn message(self) -> &'static str {
        CLOSING_MESSAGES[self as usize].1
    }
}

fn join_names(names: &[String]) -> String {
    names.join(", ")
}

fn attendance_line(status: AttendanceStatus, names: &[String]) -> String {
    let marker = match status {
        AttendanceStatus::Present => "✅",
        AttendanceStatus::Late => "⚠️",
        AttendanceStatus::Absent => "❌",
        AttendanceStatus::Excused => "🙏",
    };
    let listed = if names.is_empty() { EMPTY_LIST.to_string() } else { join_names(names) };
    format!("{marker} {} ({}): {listed}", status.label(), names.len())
}

fn attendance_section(summary: &AttendanceSummary) -> String {
    if summary.all_present() {
        return format!(
            "🎉 Full attendance! ({}): {}",
            summary.present.len(),
            join_names(&summary.present)
        );
    }

    let mut lines = vec![attendance_line(AttendanceStatus::Present, &summary.present)];
    for status in [AttendanceStatus::Late, AttendanceStatus::Absent, AttendanceStatus::Excused] {
        let names = summary.names(status);
        if !names.is_empty() {
            lines.push(attendance_line(status, names));
        }
    }
    lines.join("\n")
}

/// Meeting minutes: header, attendance, then `content` as given.
pub fn meeting_minutes(
    team_name: &str,
    date: NaiveDate,
    summary: &AttendanceSummary,
    content: &str,
) -> String {
    let mut text = format!(
        "[📢 {team_name} Meeting Results]\n📅 Date: {}\n\n{}",
        date.format("%Y-%m-%d"),
        attendance_section(summary)
    );
    if !content.trim().is_empty() {
        text.push_str("\n\n");
        text.push_str(content.trim_end());
    }
    text
}

/// Weekly assignment status notice.
pub fn assignment_notice(
    team_name: &str,
    week_label: &str,
    deadline_label: &str,
    summary: &SubmissionSummary,
) -> String {
    let submitted = if summary.submitted.is_empty() {
        EMPTY_LIST.to_string()
    } else {
        join_names(&summary.submitted)
    };
    let outstanding = if summary.not_submitted.is_empty() {
        EVERYONE_SUBMITTED.to_string()
    } else {
        join_names(&summary.not_submitted)
    };
    let closing = Closing::select(summary.all_submitted());

    format!(
        "[🔥 {team_name} Assignment Status · {week_label}]\n\
         📅 Deadline: {deadline_label}\n\
         \n\
         📊 Submission rate: {rate}% ({done}/{total})\n\
         \n\
         ✅ Submitted (thanks for the hard work!)\n\
         {submitted}\n\
         \n\
         👀 Not submitted yet (you've got this!)\n\
         {outstanding}\n\
         \n\
         {closing}",
        rate = summary.rate(),
        done = summary.submitted.len(),
        total = summary.total(),
        closing = closing.message(),
    )
}
