use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::member::{Member, MemberId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
    Excused,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Present,
        AttendanceStatus::Late,
        AttendanceStatus::Absent,
        AttendanceStatus::Excused,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "PRESENT",
            AttendanceStatus::Late => "LATE",
            AttendanceStatus::Absent => "ABSENT",
            AttendanceStatus::Excused => "EXCUSED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }

    pub fn label(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Excused => "Excused",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub member_id: MemberId,
    pub status: AttendanceStatus,
}

/// One in-memory meeting session. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting {
    pub id: String,
    pub date: NaiveDate,
    pub records: Vec<AttendanceRecord>,
}

impl Meeting {
    /// Open a session for every alive member, everyone marked present.
    pub fn open(date: NaiveDate, roster: &[Member]) -> Self {
        let records = roster
            .iter()
            .filter(|m| m.is_alive())
            .map(|m| AttendanceRecord {
                member_id: m.id.clone(),
                status: AttendanceStatus::Present,
            })
            .collect();
        Self::from_records(date, records)
    }

    /// Rebuild a session from submitted records. Later duplicates of a
    /// member id are dropped.
    pub fn from_records(date: NaiveDate, records: Vec<AttendanceRecord>) -> Self {
        let mut seen = HashSet::new();
        let records = records
            .into_iter()
            .filter(|r| seen.insert(r.member_id.clone()))
            .collect();
        Self { id: crate::models::session_id(), date, records }
    }

    /// Change one member's status. Returns `false` when the member is not
    /// part of this session; the record set is never resized.
    pub fn set_status(&mut self, member_id: &str, status: AttendanceStatus) -> bool {
        match self.records.iter_mut().find(|r| r.member_id == member_id) {
            Some(record) => {
                record.status = status;
                true
            }
            None => false,
        }
    }

    pub fn status_of(&self, member_id: &str) -> Option<AttendanceStatus> {
        self.records.iter().find(|r| r.member_id == member_id).map(|r| r.status)
    }
}
