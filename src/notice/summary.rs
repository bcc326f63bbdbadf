use std::collections::HashMap;

use serde::Serialize;

use crate::models::assignment::{AssignmentRecord, AssignmentStatus};
use crate::models::meeting::{AttendanceRecord, AttendanceStatus};
use crate::models::member::Member;

fn name_index(members: &[Member]) -> HashMap<&str, &str> {
    members.iter().map(|m| (m.id.as_str(), m.name.as_str())).collect()
}

/// Member names per attendance status, in record order. Records whose
/// member is unknown are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceSummary {
    pub present: Vec<String>,
    pub late: Vec<String>,
    pub absent: Vec<String>,
    pub excused: Vec<String>,
}

impl AttendanceSummary {
    pub fn new(records: &[AttendanceRecord], members: &[Member]) -> Self {
        let names = name_index(members);
        let mut summary = Self::default();
        for record in records {
            let Some(name) = names.get(record.member_id.as_str()) else {
                continue;
            };
            let bucket = match record.status {
                AttendanceStatus::Present => &mut summary.present,
                AttendanceStatus::Late => &mut summary.late,
                AttendanceStatus::Absent => &mut summary.absent,
                AttendanceStatus::Excused => &mut summary.excused,
            };
            bucket.push((*name).to_string());
        }
        summary
    }

    pub fn names(&self, status: AttendanceStatus) -> &[String] {
        match status {
            AttendanceStatus::Present => &self.present,
            AttendanceStatus::Late => &self.late,
            AttendanceStatus::Absent => &self.absent,
            AttendanceStatus::Excused => &self.excused,
        }
    }

    pub fn count(&self, status: AttendanceStatus) -> usize {
        self.names(status).len()
    }

    pub fn total(&self) -> usize {
        AttendanceStatus::ALL.into_iter().map(|s| self.count(s)).sum()
    }

    /// At least one member, and nobody late, absent or excused.
    pub fn all_present(&self) -> bool {
        !self.present.is_empty() && self.total() == self.present.len()
    }
}

/// Member names per submission status, in record order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionSummary {
    pub submitted: Vec<String>,
    pub not_submitted: Vec<String>,
}

impl SubmissionSummary {
    pub fn new(records: &[AssignmentRecord], members: &[Member]) -> Self {
        let names = name_index(members);
        let mut summary = Self::default();
        for record in records {
            let Some(name) = names.get(record.member_id.as_str()) else {
                continue;
            };
            match record.status {
                AssignmentStatus::Submitted => summary.submitted.push((*name).to_string()),
                AssignmentStatus::NotSubmitted => summary.not_submitted.push((*name).to_string()),
            }
        }
        summary
    }

    pub fn count(&self, status: AssignmentStatus) -> usize {
        match status {
            AssignmentStatus::Submitted => self.submitted.len(),
            AssignmentStatus::NotSubmitted => self.not_submitted.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.submitted.len() + self.not_submitted.len()
    }

    pub fn rate(&self) -> u32 {
        submission_rate(self.submitted.len(), self.total())
    }

    pub fn all_submitted(&self) -> bool {
        self.not_submitted.is_empty()
    }
}

/// Percentage of submissions rounded half up; 0 for an empty roster.
pub fn submission_rate(submitted: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let rate = (submitted * 200 + total) / (total * 2);
    u32::try_from(rate).unwrap_or(u32::MAX)
}
