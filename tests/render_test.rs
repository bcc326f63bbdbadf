use chrono::NaiveDate;

use teamlead::models::assignment::{Assignment, AssignmentStatus};
use teamlead::models::meeting::{AttendanceStatus, Meeting};
use teamlead::notice::{self, AttendanceSummary, Closing, SubmissionSummary, meeting_minutes};

mod common;
use common::{TEAM_NAME, roster};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

// ---------------------------------------------------------------------------
// Meeting minutes
// ---------------------------------------------------------------------------

#[test]
fn test_minutes_full_attendance() {
    let meeting = Meeting::open(date(), &roster());
    let text = notice::minutes_for(&meeting, &roster(), TEAM_NAME, "");

    assert_eq!(
        text,
        "[📢 Night Owls Meeting Results]\n📅 Date: 2026-03-02\n\n🎉 Full attendance! (3): Alice, Bob, Carol"
    );
}

#[test]
fn test_minutes_lists_only_nonempty_sections() {
    let mut meeting = Meeting::open(date(), &roster());
    meeting.set_status("b", AttendanceStatus::Absent);
    let text = notice::minutes_for(&meeting, &roster(), TEAM_NAME, "Discussed the roadmap.\n\n");

    assert_eq!(
        text,
        "[📢 Night Owls Meeting Results]\n📅 Date: 2026-03-02\n\n\
         ✅ Present (2): Alice, Carol\n\
         ❌ Absent (1): Bob\n\n\
         Discussed the roadmap."
    );
    assert!(!text.contains("Late"));
    assert!(!text.contains("Excused"));
}

#[test]
fn test_minutes_every_status() {
    let mut meeting = Meeting::open(date(), &roster());
    meeting.set_status("a", AttendanceStatus::Late);
    meeting.set_status("b", AttendanceStatus::Excused);
    meeting.set_status("c", AttendanceStatus::Absent);
    let text = notice::minutes_for(&meeting, &roster(), TEAM_NAME, "   ");

    assert!(text.contains("✅ Present (0): -"));
    assert!(text.contains("⚠️ Late (1): Alice"));
    assert!(text.contains("❌ Absent (1): Carol"));
    assert!(text.contains("🙏 Excused (1): Bob"));
    assert!(text.ends_with("🙏 Excused (1): Bob"));
}

#[test]
fn test_minutes_empty_roster() {
    let text = meeting_minutes(TEAM_NAME, date(), &AttendanceSummary::default(), "");
    assert!(text.ends_with("✅ Present (0): -"));
}

// ---------------------------------------------------------------------------
// Assignment notice
// ---------------------------------------------------------------------------

#[test]
fn test_notice_with_outstanding_members() {
    let mut assignment = Assignment::open("Week 3", "Sunday 10 PM", &roster());
    assignment.toggle("a");
    let text = notice::notice_for(&assignment, &roster(), TEAM_NAME);

    assert_eq!(
        text,
        "[🔥 Night Owls Assignment Status · Week 3]\n\
         📅 Deadline: Sunday 10 PM\n\
         \n\
         📊 Submission rate: 33% (1/3)\n\
         \n\
         ✅ Submitted (thanks for the hard work!)\n\
         Alice\n\
         \n\
         👀 Not submitted yet (you've got this!)\n\
         Bob, Carol\n\
         \n\
         Please make sure to submit before the deadline! 🙏"
    );
}

#[test]
fn test_notice_everyone_submitted() {
    let mut assignment = Assignment::open("", "", &roster());
    for id in ["a", "b", "c"] {
        assignment.set_status(id, AssignmentStatus::Submitted);
    }
    let text = notice::notice_for(&assignment, &roster(), TEAM_NAME);

    assert!(text.starts_with("[🔥 Night Owls Assignment Status · This week]\n📅 Deadline: Sunday 9 PM"));
    assert!(text.contains("📊 Submission rate: 100% (3/3)"));
    assert!(text.contains("None (everyone has submitted! 🎉)"));
    assert!(text.ends_with(Closing::AllSubmitted.message()));
}

#[test]
fn test_notice_two_of_two_submitted() {
    let all = roster();
    let members = &all[..2];
    let mut assignment = Assignment::open("Week 4", "Sunday", members);
    assignment.toggle("a");
    assignment.toggle("b");
    let text = notice::notice_for(&assignment, members, TEAM_NAME);

    assert!(text.contains("📊 Submission rate: 100% (2/2)"));
    assert!(text.contains("✅ Submitted (thanks for the hard work!)\nAlice, Bob\n"));
    assert!(text.contains("None (everyone has submitted! 🎉)"));
    assert!(text.ends_with("Great work this week, everyone! Let's keep it up next week! 💪"));
}

#[test]
fn test_notice_nobody_submitted() {
    let assignment = Assignment::open("Week 1", "Friday", &roster());
    let text = notice::notice_for(&assignment, &roster(), TEAM_NAME);

    assert!(text.contains("📊 Submission rate: 0% (0/3)"));
    assert!(text.contains("✅ Submitted (thanks for the hard work!)\n-\n"));
    assert!(text.ends_with(Closing::Outstanding.message()));
}

#[test]
fn test_notice_empty_roster_has_zero_rate() {
    let text = teamlead::notice::assignment_notice(TEAM_NAME, "W", "D", &SubmissionSummary::default());
    assert!(text.contains("📊 Submission rate: 0% (0/0)"));
    assert!(text.contains("None (everyone has submitted! 🎉)"));
}

#[test]
fn test_closing_selection() {
    assert_eq!(Closing::select(true), Closing::AllSubmitted);
    assert_eq!(Closing::select(false), Closing::Outstanding);
    assert_ne!(Closing::AllSubmitted.message(), Closing::Outstanding.message());
}
