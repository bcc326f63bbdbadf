use chrono::Weekday;

use super::member::Member;

/// The dashboard's reminder card for the current day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayTask {
    pub title: &'static str,
    pub description: &'static str,
}

/// Assignments close on Sunday evening and the week's meeting gets
/// scheduled on Monday; every other day gets a general note.
pub fn today_task(day: Weekday) -> TodayTask {
    match day {
        Weekday::Sun => TodayTask {
            title: "🔥 Assignment deadline",
            description: "Submissions close at 9 PM. Check who is still missing and give them a nudge!",
        },
        Weekday::Mon => TodayTask {
            title: "📅 New week",
            description: "Have you scheduled this week's meeting yet?",
        },
        _ => TodayTask {
            title: "✨ Have a good day",
            description: "Keep in touch with the team and have a great day!",
        },
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterStats {
    pub total: usize,
    pub alive: usize,
    pub eliminated: usize,
    pub total_absences: u32,
    pub total_missed_assignments: u32,
}

impl RosterStats {
    pub fn from_members(members: &[Member]) -> Self {
        let alive = members.iter().filter(|m| m.is_alive()).count();
        Self {
            total: members.len(),
            alive,
            eliminated: members.len() - alive,
            total_absences: members
                .iter()
                .fold(0u32, |acc, m| acc.saturating_add(m.absent_count)),
            total_missed_assignments: members
                .iter()
                .fold(0u32, |acc, m| acc.saturating_add(m.missed_assignment_count)),
        }
    }
}
