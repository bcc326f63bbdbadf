use std::collections::HashMap;

use actix_session::Session;
use actix_web::{HttpResponse, web};

use super::{deliver, finalize_message, get_all, get_field, parse_form_body, see_other};
use crate::errors::{AppError, render};
use crate::models::assignment::{
    Assignment, AssignmentRecord, AssignmentStatus, DEFAULT_DEADLINE, DEFAULT_WEEK_LABEL,
};
use crate::models::member::Member;
use crate::notice::{self, SubmissionSummary, finalize};
use crate::session::{csrf, set_flash};
use crate::state::AppState;
use crate::templates_structs::{AssignmentTemplate, PageContext, SubmissionRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssignmentAction {
    Generate,
    Send,
    Finalize,
}

impl AssignmentAction {
    fn parse(s: &str) -> Result<Self, AppError> {
        match s {
            "generate" => Ok(AssignmentAction::Generate),
            "send" => Ok(AssignmentAction::Send),
            "finalize" => Ok(AssignmentAction::Finalize),
            other => Err(AppError::Validation(format!("Unknown action '{other}'"))),
        }
    }
}

/// Rebuild the check from the form: every listed member starts as not
/// submitted and each ticked checkbox toggles them.
fn assignment_from_params(params: &[(String, String)]) -> Assignment {
    let ids = get_all(params, "member");
    let records = ids
        .iter()
        .map(|id| AssignmentRecord {
            member_id: id.to_string(),
            status: AssignmentStatus::NotSubmitted,
        })
        .collect();
    let mut assignment = Assignment::from_records(
        get_field(params, "week_label"),
        get_field(params, "deadline"),
        records,
    );
    for id in ids {
        if get_field(params, &format!("submitted_{id}")) == "on"
            && assignment.status_of(id) == Some(AssignmentStatus::NotSubmitted)
        {
            assignment.toggle(id);
        }
    }
    assignment
}

#[derive(Default)]
struct Outcome {
    notice: Option<String>,
    errors: Vec<String>,
    message: Option<String>,
}

fn page_template(
    ctx: PageContext,
    assignment: &Assignment,
    members: &[Member],
    webhook_configured: bool,
    outcome: Outcome,
) -> AssignmentTemplate {
    let names: HashMap<&str, &str> = members.iter().map(|m| (m.id.as_str(), m.name.as_str())).collect();
    let rows = assignment
        .records
        .iter()
        .map(|r| {
            let name = names.get(r.member_id.as_str());
            SubmissionRow {
                member_id: r.member_id.clone(),
                name: name.map(|n| n.to_string()).unwrap_or_default(),
                known: name.is_some(),
                submitted: r.status == AssignmentStatus::Submitted,
            }
        })
        .collect();

    AssignmentTemplate {
        ctx,
        week_label: assignment.week_label.clone(),
        deadline: assignment.deadline.clone(),
        rows,
        rate: SubmissionSummary::new(&assignment.records, members).rate(),
        notice: outcome.notice,
        errors: outcome.errors,
        message: outcome.message,
        webhook_configured,
    }
}

/// GET /assignment: open a fresh check with every active member not yet submitted.
pub async fn page(
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &state, "/assignment").await;
    let settings = state.settings.get().await;
    let (members, load_error) = state.load_members().await;
    let assignment = Assignment::open(DEFAULT_WEEK_LABEL, DEFAULT_DEADLINE, &members);

    let outcome = Outcome { errors: load_error.into_iter().collect(), ..Outcome::default() };
    render(page_template(ctx, &assignment, &members, settings.webhook_url().is_some(), outcome))
}

/// POST /assignment
pub async fn submit(
    state: web::Data<AppState>,
    session: Session,
    body: String,
) -> Result<HttpResponse, AppError> {
    let params = parse_form_body(&body)?;
    csrf::validate_csrf(&session, get_field(&params, "csrf_token"))?;
    let action = AssignmentAction::parse(get_field(&params, "action"))?;
    let assignment = assignment_from_params(&params);

    let settings = state.settings.get().await;
    let (members, load_error) = state.load_members().await;
    let mut outcome = Outcome { errors: load_error.into_iter().collect(), ..Outcome::default() };

    match action {
        AssignmentAction::Generate => {
            outcome.notice = Some(notice::notice_for(&assignment, &members, &settings.team_name));
        }
        AssignmentAction::Send => {
            let text = get_field(&params, "notice");
            match deliver(&state, &settings, text).await {
                Ok(msg) => outcome.message = Some(msg),
                Err(err) => outcome.errors.push(err),
            }
            if !text.trim().is_empty() {
                outcome.notice = Some(text.to_string());
            }
        }
        AssignmentAction::Finalize => {
            let report = finalize::finalize_assignment(state.members.as_ref(), &assignment).await;
            set_flash(&session, &finalize_message(&report, "missed assignments"))?;
            return Ok(see_other("/assignment"));
        }
    }

    let ctx = PageContext::build(&session, &state, "/assignment").await;
    render(page_template(ctx, &assignment, &members, settings.webhook_url().is_some(), outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn ticked_members_are_submitted() {
        let a = assignment_from_params(&params(&[
            ("week_label", "Week 3"),
            ("deadline", ""),
            ("member", "a"),
            ("member", "b"),
            ("submitted_b", "on"),
        ]));
        assert_eq!(a.records.len(), 2);
        assert_eq!(a.records[0].status, AssignmentStatus::NotSubmitted);
        assert_eq!(a.records[1].status, AssignmentStatus::Submitted);
        assert_eq!(a.week_label(), "Week 3");
        assert_eq!(a.deadline_label(), DEFAULT_DEADLINE);
    }

    #[test]
    fn duplicate_member_entries_count_once() {
        let a = assignment_from_params(&params(&[
            ("member", "a"),
            ("member", "a"),
            ("submitted_a", "on"),
        ]));
        assert_eq!(a.records.len(), 1);
        assert_eq!(a.records[0].status, AssignmentStatus::Submitted);
    }
}
