pub mod api_v1;
pub mod assignment_handlers;
pub mod dashboard;
pub mod meeting_handlers;
pub mod member_handlers;
pub mod settings_handlers;

use actix_web::{HttpResponse, middleware, web};
use askama::Template;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::setting::Settings;
use crate::notice::FinalizeReport;
use crate::state::AppState;
use crate::templates_structs::NotFoundTemplate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(|| async { see_other("/dashboard") }))
        .route("/dashboard", web::get().to(dashboard::index))
        .route("/members", web::post().to(member_handlers::create))
        .route("/members/{id}/toggle", web::post().to(member_handlers::toggle))
        .route("/members/{id}/delete", web::post().to(member_handlers::delete))
        .route("/meeting", web::get().to(meeting_handlers::page))
        .route("/meeting", web::post().to(meeting_handlers::submit))
        .route("/assignment", web::get().to(assignment_handlers::page))
        .route("/assignment", web::post().to(assignment_handlers::submit))
        .route("/settings", web::get().to(settings_handlers::form))
        .route("/settings", web::post().to(settings_handlers::save))
        .service(
            web::scope("/api/v1")
                .configure(api_v1::configure)
                .wrap(middleware::from_fn(api_v1::require_json_content_type)),
        );
}

/// Default service: HTML 404 page.
pub async fn not_found() -> Result<HttpResponse, AppError> {
    let body = NotFoundTemplate.render()?;
    Ok(HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

/// Forms that carry nothing but the CSRF token.
#[derive(Debug, Deserialize)]
pub struct CsrfForm {
    pub csrf_token: String,
}

pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

/// Parse a URL-encoded body into ordered key-value pairs. Repeated keys
/// are kept, which the session forms rely on for their member snapshot.
pub(crate) fn parse_form_body(body: &str) -> Result<Vec<(String, String)>, AppError> {
    serde_urlencoded::from_str::<Vec<(String, String)>>(body)
        .map_err(|e| AppError::Validation(format!("Malformed form data: {e}")))
}

pub(crate) fn get_field<'a>(params: &'a [(String, String)], key: &str) -> &'a str {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .unwrap_or("")
}

pub(crate) fn get_all<'a>(params: &'a [(String, String)], key: &str) -> Vec<&'a str> {
    params
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .collect()
}

/// Post `text` to the configured webhook. `Ok` carries the confirmation
/// to show, `Err` the problem.
pub(crate) async fn deliver(state: &AppState, settings: &Settings, text: &str) -> Result<String, String> {
    if text.trim().is_empty() {
        return Err("Generate the text before sending it.".to_string());
    }
    let Some(url) = settings.webhook_url() else {
        return Err("Register a Discord webhook URL on the Settings page first!".to_string());
    };
    if state.sink.send(url, text).await {
        Ok("Sent to Discord!".to_string())
    } else {
        Err("Sending failed. Please check the webhook URL.".to_string())
    }
}

/// One-line outcome of a finalize pass for the flash message.
pub(crate) fn finalize_message(report: &FinalizeReport, what: &str) -> String {
    if report.load_error.is_some() {
        return "Could not save the results because the member list is unavailable. Please try again."
            .to_string();
    }
    if report.failed() > 0 {
        let failed: Vec<&str> = report
            .outcomes
            .iter()
            .filter(|o| !o.ok)
            .map(|o| o.name.as_str())
            .collect();
        return format!(
            "Saved {} of {} updates. Could not update: {}.",
            report.succeeded(),
            report.outcomes.len(),
            failed.join(", ")
        );
    }
    if report.outcomes.is_empty() {
        return format!("Results saved. No {what} to record.");
    }
    let names: Vec<&str> = report.outcomes.iter().map(|o| o.name.as_str()).collect();
    format!("Results saved. Recorded {what} for: {}.", names.join(", "))
}
