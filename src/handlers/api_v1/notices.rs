use actix_web::{HttpResponse, web};
use chrono::{Local, NaiveDate};

use super::store_error_response;
use crate::models::assignment::Assignment;
use crate::models::meeting::Meeting;
use crate::notice::{self, AttendanceSummary, FinalizeReport, SubmissionSummary, finalize};
use crate::state::AppState;
use crate::templates_structs::{
    ApiErrorResponse, ApiFinalizeAssignmentRequest, ApiFinalizeMeetingRequest, ApiMinutesRequest,
    ApiMinutesResponse, ApiNoticeRequest, ApiNoticeResponse,
};

fn parse_date(raw: Option<&str>) -> Result<NaiveDate, HttpResponse> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(Local::now().date_naive()),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            HttpResponse::BadRequest().json(ApiErrorResponse::new(format!("Invalid date '{s}', expected YYYY-MM-DD")))
        }),
    }
}

/// 200 when every update landed, 503 when the roster could not be read,
/// 500 when some updates failed. The report is the body in every case.
fn report_response(report: FinalizeReport) -> HttpResponse {
    if report.load_error.is_some() {
        HttpResponse::ServiceUnavailable().json(report)
    } else if report.failed() > 0 {
        HttpResponse::InternalServerError().json(report)
    } else {
        HttpResponse::Ok().json(report)
    }
}

/// POST /api/v1/minutes - Render meeting minutes from attendance records
pub async fn minutes(state: web::Data<AppState>, body: web::Json<ApiMinutesRequest>) -> HttpResponse {
    let body = body.into_inner();
    let date = match parse_date(body.date.as_deref()) {
        Ok(d) => d,
        Err(resp) => return resp,
    };
    let members = match state.members.list().await {
        Ok(m) => m,
        Err(e) => return store_error_response(e),
    };
    let settings = state.settings.get().await;

    let meeting = Meeting::from_records(date, body.records);
    HttpResponse::Ok().json(ApiMinutesResponse {
        text: notice::minutes_for(&meeting, &members, &settings.team_name, &body.content),
        summary: AttendanceSummary::new(&meeting.records, &members),
    })
}

/// POST /api/v1/notice - Render the assignment status notice
pub async fn notice(state: web::Data<AppState>, body: web::Json<ApiNoticeRequest>) -> HttpResponse {
    let body = body.into_inner();
    let members = match state.members.list().await {
        Ok(m) => m,
        Err(e) => return store_error_response(e),
    };
    let settings = state.settings.get().await;

    let assignment = Assignment::from_records(&body.week_label, &body.deadline, body.records);
    let summary = SubmissionSummary::new(&assignment.records, &members);
    HttpResponse::Ok().json(ApiNoticeResponse {
        text: notice::notice_for(&assignment, &members, &settings.team_name),
        rate: summary.rate(),
        summary,
    })
}

/// POST /api/v1/finalize/meeting - Add one absence per absent record
pub async fn finalize_meeting(
    state: web::Data<AppState>,
    body: web::Json<ApiFinalizeMeetingRequest>,
) -> HttpResponse {
    let meeting = Meeting::from_records(Local::now().date_naive(), body.into_inner().records);
    report_response(finalize::finalize_meeting(state.members.as_ref(), &meeting).await)
}

/// POST /api/v1/finalize/assignment - Add one missed assignment per unsubmitted record
pub async fn finalize_assignment(
    state: web::Data<AppState>,
    body: web::Json<ApiFinalizeAssignmentRequest>,
) -> HttpResponse {
    let assignment = Assignment::from_records("", "", body.into_inner().records);
    report_response(finalize::finalize_assignment(state.members.as_ref(), &assignment).await)
}
