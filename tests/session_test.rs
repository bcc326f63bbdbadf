use chrono::NaiveDate;

use teamlead::models::assignment::{Assignment, AssignmentRecord, AssignmentStatus, DEFAULT_DEADLINE, DEFAULT_WEEK_LABEL};
use teamlead::models::meeting::{AttendanceRecord, AttendanceStatus, Meeting};

mod common;
use common::roster;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

#[test]
fn test_meeting_opens_with_alive_members_present() {
    let meeting = Meeting::open(date(), &roster());

    let ids: Vec<&str> = meeting.records.iter().map(|r| r.member_id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert!(meeting.records.iter().all(|r| r.status == AttendanceStatus::Present));
    assert_eq!(meeting.date, date());
}

#[test]
fn test_meeting_set_status_never_resizes() {
    let mut meeting = Meeting::open(date(), &roster());

    assert!(meeting.set_status("b", AttendanceStatus::Late));
    assert!(!meeting.set_status("d", AttendanceStatus::Absent));
    assert!(!meeting.set_status("nobody", AttendanceStatus::Absent));

    assert_eq!(meeting.records.len(), 3);
    assert_eq!(meeting.status_of("b"), Some(AttendanceStatus::Late));
    assert_eq!(meeting.status_of("d"), None);
}

#[test]
fn test_meeting_from_records_drops_duplicates() {
    let records = vec![
        AttendanceRecord { member_id: "a".into(), status: AttendanceStatus::Absent },
        AttendanceRecord { member_id: "a".into(), status: AttendanceStatus::Present },
        AttendanceRecord { member_id: "b".into(), status: AttendanceStatus::Late },
    ];
    let meeting = Meeting::from_records(date(), records);

    assert_eq!(meeting.records.len(), 2);
    assert_eq!(meeting.status_of("a"), Some(AttendanceStatus::Absent));
}

#[test]
fn test_sessions_get_distinct_ids() {
    let first = Meeting::open(date(), &roster());
    let second = Meeting::open(date(), &roster());
    assert_ne!(first.id, second.id);
}

#[test]
fn test_assignment_opens_not_submitted() {
    let assignment = Assignment::open("Week 2", "Friday 6 PM", &roster());

    assert_eq!(assignment.records.len(), 3);
    assert!(assignment.records.iter().all(|r| r.status == AssignmentStatus::NotSubmitted));
    assert_eq!(assignment.week_label(), "Week 2");
    assert_eq!(assignment.deadline_label(), "Friday 6 PM");
}

#[test]
fn test_assignment_toggle_flips_status() {
    let mut assignment = Assignment::open("", "", &roster());

    assert!(assignment.toggle("a"));
    assert_eq!(assignment.status_of("a"), Some(AssignmentStatus::Submitted));
    assert!(assignment.toggle("a"));
    assert_eq!(assignment.status_of("a"), Some(AssignmentStatus::NotSubmitted));
    assert!(!assignment.toggle("d"));
    assert_eq!(assignment.records.len(), 3);
}

#[test]
fn test_assignment_blank_labels_fall_back() {
    let records = vec![AssignmentRecord { member_id: "a".into(), status: AssignmentStatus::Submitted }];
    let assignment = Assignment::from_records("  ", "", records);

    assert_eq!(assignment.week_label(), DEFAULT_WEEK_LABEL);
    assert_eq!(assignment.deadline_label(), DEFAULT_DEADLINE);
}
