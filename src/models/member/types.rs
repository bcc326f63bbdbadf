use serde::{Deserialize, Serialize};

use crate::models::columns::{ColumnValue, count_to_column};

pub type MemberId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberStatus {
    Alive,
    Eliminated,
}

impl MemberStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MemberStatus::Alive => "ALIVE",
            MemberStatus::Eliminated => "ELIMINATED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ALIVE" => Some(MemberStatus::Alive),
            "ELIMINATED" => Some(MemberStatus::Eliminated),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            MemberStatus::Alive => MemberStatus::Eliminated,
            MemberStatus::Eliminated => MemberStatus::Alive,
        }
    }

    /// Human label for the status badge.
    pub fn label(self) -> &'static str {
        match self {
            MemberStatus::Alive => "Active",
            MemberStatus::Eliminated => "Eliminated",
        }
    }
}

/// A roster entry with its running attendance/submission counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub status: MemberStatus,
    pub absent_count: u32,
    pub missed_assignment_count: u32,
}

impl Member {
    /// A freshly added member: alive, counters at zero.
    pub fn new(id: impl Into<MemberId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: MemberStatus::Alive,
            absent_count: 0,
            missed_assignment_count: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.status == MemberStatus::Alive
    }

    pub fn status_label(&self) -> &'static str {
        self.status.label()
    }
}

/// Which per-member counter a finalize pass increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Counter {
    Absent,
    MissedAssignment,
}

impl Counter {
    pub fn get(self, member: &Member) -> u32 {
        match self {
            Counter::Absent => member.absent_count,
            Counter::MissedAssignment => member.missed_assignment_count,
        }
    }

    /// Domain field name of the counter.
    pub fn field(self) -> &'static str {
        match self {
            Counter::Absent => "absentCount",
            Counter::MissedAssignment => "missedAssignmentCount",
        }
    }
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MemberStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absent_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missed_assignment_count: Option<u32>,
}

impl MemberUpdate {
    pub fn status(status: MemberStatus) -> Self {
        Self { status: Some(status), ..Self::default() }
    }

    pub fn counter(counter: Counter, value: u32) -> Self {
        match counter {
            Counter::Absent => Self { absent_count: Some(value), ..Self::default() },
            Counter::MissedAssignment => Self {
                missed_assignment_count: Some(value),
                ..Self::default()
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.status.is_none()
            && self.absent_count.is_none()
            && self.missed_assignment_count.is_none()
    }

    /// Set fields as `(domain field, value)` pairs, in a stable order.
    pub fn changed_fields(&self) -> Vec<(&'static str, ColumnValue)> {
        let mut fields = Vec::new();
        if let Some(name) = &self.name {
            fields.push(("name", ColumnValue::Text(name.clone())));
        }
        if let Some(status) = self.status {
            fields.push(("status", ColumnValue::Text(status.as_str().to_string())));
        }
        if let Some(n) = self.absent_count {
            fields.push((Counter::Absent.field(), ColumnValue::Int(count_to_column(n))));
        }
        if let Some(n) = self.missed_assignment_count {
            fields.push((Counter::MissedAssignment.field(), ColumnValue::Int(count_to_column(n))));
        }
        fields
    }

    /// First counter this update would set below the member's current value.
    pub fn lowered_counter(&self, member: &Member) -> Option<Counter> {
        [
            (Counter::Absent, self.absent_count),
            (Counter::MissedAssignment, self.missed_assignment_count),
        ]
        .into_iter()
        .find_map(|(counter, value)| value.filter(|v| *v < counter.get(member)).map(|_| counter))
    }

    pub fn apply(&self, member: &mut Member) {
        if let Some(name) = &self.name {
            member.name = name.clone();
        }
        if let Some(status) = self.status {
            member.status = status;
        }
        if let Some(n) = self.absent_count {
            member.absent_count = n;
        }
        if let Some(n) = self.missed_assignment_count {
            member.missed_assignment_count = n;
        }
    }
}

/// Form data from the add-member form.
#[derive(Debug, Deserialize)]
pub struct MemberForm {
    pub name: String,
    pub csrf_token: String,
}
