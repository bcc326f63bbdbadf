use actix_web::{HttpResponse, web};

use super::store_error_response;
use crate::models::setting::{self, Settings};
use crate::state::AppState;
use crate::templates_structs::ApiErrorResponse;

/// GET /api/v1/settings
pub async fn read(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.settings.get().await)
}

/// PUT /api/v1/settings - Replace the settings record
pub async fn update(state: web::Data<AppState>, body: web::Json<Settings>) -> HttpResponse {
    let webhook = body.discord_webhook_url.as_deref().unwrap_or("");
    let errors = setting::validate(&body.team_name, webhook);
    if !errors.is_empty() {
        return HttpResponse::BadRequest().json(ApiErrorResponse {
            error: "Invalid settings".to_string(),
            details: Some(errors.join("; ")),
        });
    }

    let settings = Settings::from_stored(&body.team_name, webhook);
    match state.settings.save(&settings).await {
        Ok(()) => HttpResponse::Ok().json(settings),
        Err(e) => store_error_response(e),
    }
}
