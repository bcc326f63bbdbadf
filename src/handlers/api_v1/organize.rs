use actix_web::{HttpResponse, web};

use crate::state::AppState;
use crate::templates_structs::{
    ApiErrorResponse, ApiGenerateRequest, ApiGenerateResponse, ApiNotifyRequest, ApiNotifyResponse,
};

/// POST /api/v1/generate - Organize raw meeting notes into minutes text
pub async fn generate(state: web::Data<AppState>, body: web::Json<ApiGenerateRequest>) -> HttpResponse {
    match state.organizer.organize(&body.notes).await {
        Ok(result) => HttpResponse::Ok().json(ApiGenerateResponse { result }),
        Err(e) if e.is_validation() => HttpResponse::BadRequest().json(ApiErrorResponse::new(e.user_message())),
        Err(e) => {
            log::error!("Organizing notes failed: {e}");
            HttpResponse::InternalServerError().json(ApiErrorResponse::new(e.user_message()))
        }
    }
}

/// POST /api/v1/notify - Post text to the configured Discord webhook
pub async fn notify(state: web::Data<AppState>, body: web::Json<ApiNotifyRequest>) -> HttpResponse {
    if body.text.trim().is_empty() {
        return HttpResponse::BadRequest().json(ApiErrorResponse::new("Text is required"));
    }
    let settings = state.settings.get().await;
    let Some(url) = settings.webhook_url() else {
        return HttpResponse::BadRequest().json(ApiErrorResponse::new("No Discord webhook URL is configured"));
    };

    let sent = state.sink.send(url, &body.text).await;
    HttpResponse::Ok().json(ApiNotifyResponse { sent })
}
