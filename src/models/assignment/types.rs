use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::member::{Member, MemberId};

pub const DEFAULT_WEEK_LABEL: &str = "This week";
pub const DEFAULT_DEADLINE: &str = "Sunday 9 PM";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    Submitted,
    NotSubmitted,
}

impl AssignmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AssignmentStatus::Submitted => "SUBMITTED",
            AssignmentStatus::NotSubmitted => "NOT_SUBMITTED",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            AssignmentStatus::Submitted => AssignmentStatus::NotSubmitted,
            AssignmentStatus::NotSubmitted => AssignmentStatus::Submitted,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AssignmentStatus::Submitted => "Submitted",
            AssignmentStatus::NotSubmitted => "Not submitted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRecord {
    pub member_id: MemberId,
    pub status: AssignmentStatus,
}

/// One in-memory assignment check. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub id: String,
    pub week_label: String,
    pub deadline: String,
    pub records: Vec<AssignmentRecord>,
}

impl Assignment {
    /// Open a check for every alive member, nobody submitted yet.
    pub fn open(week_label: &str, deadline: &str, roster: &[Member]) -> Self {
        let records = roster
            .iter()
            .filter(|m| m.is_alive())
            .map(|m| AssignmentRecord {
                member_id: m.id.clone(),
                status: AssignmentStatus::NotSubmitted,
            })
            .collect();
        Self::from_records(week_label, deadline, records)
    }

    pub fn from_records(week_label: &str, deadline: &str, records: Vec<AssignmentRecord>) -> Self {
        let mut seen = HashSet::new();
        let records = records
            .into_iter()
            .filter(|r| seen.insert(r.member_id.clone()))
            .collect();
        Self {
            id: crate::models::session_id(),
            week_label: week_label.trim().to_string(),
            deadline: deadline.trim().to_string(),
            records,
        }
    }

    pub fn set_status(&mut self, member_id: &str, status: AssignmentStatus) -> bool {
        match self.records.iter_mut().find(|r| r.member_id == member_id) {
            Some(record) => {
                record.status = status;
                true
            }
            None => false,
        }
    }

    /// Flip one member between submitted and not submitted.
    pub fn toggle(&mut self, member_id: &str) -> bool {
        match self.records.iter_mut().find(|r| r.member_id == member_id) {
            Some(record) => {
                record.status = record.status.toggled();
                true
            }
            None => false,
        }
    }

    pub fn status_of(&self, member_id: &str) -> Option<AssignmentStatus> {
        self.records.iter().find(|r| r.member_id == member_id).map(|r| r.status)
    }

    pub fn week_label(&self) -> &str {
        if self.week_label.is_empty() { DEFAULT_WEEK_LABEL } else { &self.week_label }
    }

    pub fn deadline_label(&self) -> &str {
        if self.deadline.is_empty() { DEFAULT_DEADLINE } else { &self.deadline }
    }
}
