pub mod forms;

use std::collections::HashMap;

use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::Local;

use self::forms::{MeetingAction, MeetingForm};
use super::{deliver, finalize_message, get_field, parse_form_body, see_other};
use crate::errors::{AppError, render};
use crate::models::meeting::Meeting;
use crate::models::member::Member;
use crate::notice::{self, finalize};
use crate::session::{csrf, set_flash};
use crate::state::AppState;
use crate::templates_structs::{AttendanceRow, MeetingTemplate, PageContext, StatusOption};

/// Results of one page action shown alongside the form.
#[derive(Default)]
struct Outcome {
    notes: String,
    minutes: Option<String>,
    errors: Vec<String>,
    message: Option<String>,
}

fn attendance_rows(meeting: &Meeting, members: &[Member]) -> Vec<AttendanceRow> {
    let names: HashMap<&str, &str> = members.iter().map(|m| (m.id.as_str(), m.name.as_str())).collect();
    meeting
        .records
        .iter()
        .map(|r| {
            let name = names.get(r.member_id.as_str());
            AttendanceRow {
                member_id: r.member_id.clone(),
                name: name.map(|n| n.to_string()).unwrap_or_default(),
                known: name.is_some(),
                status: r.status.as_str(),
            }
        })
        .collect()
}

fn page_template(
    ctx: PageContext,
    meeting: &Meeting,
    members: &[Member],
    webhook_configured: bool,
    outcome: Outcome,
) -> MeetingTemplate {
    MeetingTemplate {
        ctx,
        date: meeting.date.format("%Y-%m-%d").to_string(),
        rows: attendance_rows(meeting, members),
        statuses: StatusOption::attendance(),
        notes: outcome.notes,
        minutes: outcome.minutes,
        errors: outcome.errors,
        message: outcome.message,
        webhook_configured,
    }
}

/// GET /meeting: open a fresh session for today with every active member present.
pub async fn page(
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &state, "/meeting").await;
    let settings = state.settings.get().await;
    let (members, load_error) = state.load_members().await;
    let meeting = Meeting::open(Local::now().date_naive(), &members);

    let outcome = Outcome { errors: load_error.into_iter().collect(), ..Outcome::default() };
    render(page_template(ctx, &meeting, &members, settings.webhook_url().is_some(), outcome))
}

/// POST /meeting: run one action against the session carried by the form.
pub async fn submit(
    state: web::Data<AppState>,
    session: Session,
    body: String,
) -> Result<HttpResponse, AppError> {
    let params = parse_form_body(&body)?;
    csrf::validate_csrf(&session, get_field(&params, "csrf_token"))?;
    let form = MeetingForm::from_params(&params)?;

    let settings = state.settings.get().await;
    let (members, load_error) = state.load_members().await;
    let meeting = Meeting::from_records(form.date, form.records);

    let mut outcome = Outcome {
        notes: form.notes,
        errors: load_error.into_iter().collect(),
        ..Outcome::default()
    };

    match form.action {
        MeetingAction::Generate => {
            outcome.minutes = Some(notice::minutes_for(&meeting, &members, &settings.team_name, &outcome.notes));
        }
        MeetingAction::Organize => match state.organizer.organize(&outcome.notes).await {
            Ok(organized) => {
                outcome.minutes = Some(notice::minutes_for(&meeting, &members, &settings.team_name, &organized));
                outcome.message = Some("Notes organized. Review the minutes before sending.".to_string());
            }
            Err(e) => {
                if !e.is_validation() {
                    log::error!("Organizing meeting notes failed: {e}");
                }
                outcome.errors.push(e.user_message().to_string());
            }
        },
        MeetingAction::Send => {
            match deliver(&state, &settings, &form.minutes).await {
                Ok(msg) => outcome.message = Some(msg),
                Err(err) => outcome.errors.push(err),
            }
            if !form.minutes.trim().is_empty() {
                outcome.minutes = Some(form.minutes);
            }
        }
        MeetingAction::Finalize => {
            let report = finalize::finalize_meeting(state.members.as_ref(), &meeting).await;
            set_flash(&session, &finalize_message(&report, "absences"))?;
            return Ok(see_other("/meeting"));
        }
    }

    let ctx = PageContext::build(&session, &state, "/meeting").await;
    render(page_template(ctx, &meeting, &members, settings.webhook_url().is_some(), outcome))
}
