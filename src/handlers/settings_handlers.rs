use actix_session::Session;
use actix_web::{HttpResponse, web};

use super::see_other;
use crate::errors::{AppError, render};
use crate::models::setting::{self, Settings, SettingsForm};
use crate::session::{csrf, set_flash};
use crate::state::AppState;
use crate::templates_structs::{PageContext, SettingsTemplate};

pub async fn form(
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &state, "/settings").await;
    let settings = state.settings.get().await;

    render(SettingsTemplate {
        ctx,
        team_name: settings.team_name.clone(),
        webhook_url: settings.discord_webhook_url.unwrap_or_default(),
        errors: vec![],
    })
}

pub async fn save(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<SettingsForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let mut errors = setting::validate(&form.team_name, &form.discord_webhook_url);
    if errors.is_empty() {
        let settings = Settings::from_stored(&form.team_name, &form.discord_webhook_url);
        match state.settings.save(&settings).await {
            Ok(()) => {
                log::info!("Settings saved for team '{}'", settings.team_name);
                set_flash(&session, "Settings saved")?;
                return Ok(see_other("/settings"));
            }
            Err(e) => {
                log::error!("Error saving settings: {e}");
                errors.push("Could not save settings. Please try again.".to_string());
            }
        }
    }

    let ctx = PageContext::build(&session, &state, "/settings").await;
    render(SettingsTemplate {
        ctx,
        team_name: form.team_name.clone(),
        webhook_url: form.discord_webhook_url.clone(),
        errors,
    })
}
