use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::{Datelike, Local, Timelike};

use crate::errors::{AppError, render};
use crate::models::dashboard::{RosterStats, today_task};
use crate::state::AppState;
use crate::templates_structs::{DashboardTemplate, PageContext};

fn time_greeting(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning, team leader",
        12..=16 => "Good afternoon, team leader",
        _ => "Good evening, team leader",
    }
}

pub async fn index(
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &state, "/dashboard").await;
    let (members, load_error) = state.load_members().await;
    let now = Local::now();

    let tmpl = DashboardTemplate {
        ctx,
        greeting: time_greeting(now.hour()).to_string(),
        today: today_task(now.weekday()),
        stats: RosterStats::from_members(&members),
        members,
        load_error,
    };
    render(tmpl)
}
