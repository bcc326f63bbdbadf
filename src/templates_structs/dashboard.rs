use askama::Template;

use crate::models::dashboard::{RosterStats, TodayTask};
use crate::models::member::Member;
use super::PageContext;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub greeting: String,
    pub today: TodayTask,
    pub stats: RosterStats,
    pub members: Vec<Member>,
    pub load_error: Option<String>,
}
