//! Commit a closed session into the members' counters.
//!
//! Each planned member gets one independent store-side `increment` of the
//! plan's counter. Increments run concurrently and every one is attempted;
//! a failure is reported, never rolled back or retried. Applying the same
//! plan twice counts twice, also when both passes overlap.

use std::collections::HashMap;

use futures::future::join_all;
use serde::Serialize;

use crate::models::assignment::{Assignment, AssignmentStatus};
use crate::models::meeting::{AttendanceStatus, Meeting};
use crate::models::member::{Counter, Member, MemberId, MemberStore};

/// Members whose counter a finalize pass will increment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizePlan {
    pub counter: Counter,
    pub member_ids: Vec<MemberId>,
}

impl FinalizePlan {
    /// Every absent member gets one more absence.
    pub fn for_meeting(meeting: &Meeting) -> Self {
        Self {
            counter: Counter::Absent,
            member_ids: meeting
                .records
                .iter()
                .filter(|r| r.status == AttendanceStatus::Absent)
                .map(|r| r.member_id.clone())
                .collect(),
        }
    }

    /// Every member who did not submit gets one more missed assignment.
    pub fn for_assignment(assignment: &Assignment) -> Self {
        Self {
            counter: Counter::MissedAssignment,
            member_ids: assignment
                .records
                .iter()
                .filter(|r| r.status == AssignmentStatus::NotSubmitted)
                .map(|r| r.member_id.clone())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.member_ids.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberOutcome {
    pub member_id: MemberId,
    pub name: String,
    pub new_count: u32,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeReport {
    pub counter: Counter,
    pub outcomes: Vec<MemberOutcome>,
    /// Planned members no longer in the store.
    pub skipped: Vec<MemberId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_error: Option<String>,
}

impl FinalizeReport {
    fn empty(counter: Counter) -> Self {
        Self { counter, outcomes: Vec::new(), skipped: Vec::new(), load_error: None }
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.ok).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.ok).count()
    }

    pub fn all_ok(&self) -> bool {
        self.load_error.is_none() && self.failed() == 0
    }
}

/// Apply a plan through the store. Reads current counters first so the
/// increment is relative to what is persisted.
pub async fn apply(store: &dyn MemberStore, plan: &FinalizePlan) -> FinalizeReport {
    let mut report = FinalizeReport::empty(plan.counter);
    if plan.is_empty() {
        return report;
    }

    let members = match store.list().await {
        Ok(members) => members,
        Err(e) => {
            log::error!("Finalize aborted, could not load members: {e}");
            report.load_error = Some(e.to_string());
            report.skipped = plan.member_ids.clone();
            return report;
        }
    };
    let index: HashMap<&str, &Member> = members.iter().map(|m| (m.id.as_str(), m)).collect();

    let mut targets = Vec::with_capacity(plan.member_ids.len());
    for id in &plan.member_ids {
        match index.get(id.as_str()) {
            Some(member) => targets.push(*member),
            None => report.skipped.push(id.clone()),
        }
    }

    let counter = plan.counter;
    let updates = targets.into_iter().map(|member| async move {
        match store.increment(&member.id, counter).await {
            Ok(new_count) => MemberOutcome {
                member_id: member.id.clone(),
                name: member.name.clone(),
                new_count,
                ok: true,
                error: None,
            },
            Err(e) => {
                log::error!(
                    "Failed to increment {} for member {} ({}): {e}",
                    counter.field(),
                    member.id,
                    member.name
                );
                MemberOutcome {
                    member_id: member.id.clone(),
                    name: member.name.clone(),
                    new_count: counter.get(member).saturating_add(1),
                    ok: false,
                    error: Some(e.to_string()),
                }
            }
        }
    });
    report.outcomes = join_all(updates).await;

    log::info!(
        "Finalized {}: {} updated, {} failed, {} skipped",
        counter.field(),
        report.succeeded(),
        report.failed(),
        report.skipped.len()
    );
    report
}

pub async fn finalize_meeting(store: &dyn MemberStore, meeting: &Meeting) -> FinalizeReport {
    apply(store, &FinalizePlan::for_meeting(meeting)).await
}

pub async fn finalize_assignment(store: &dyn MemberStore, assignment: &Assignment) -> FinalizeReport {
    apply(store, &FinalizePlan::for_assignment(assignment)).await
}
