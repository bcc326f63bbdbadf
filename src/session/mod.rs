//! Cookie-session helpers: CSRF tokens and one-shot flash messages.

pub mod csrf;

use actix_session::Session;

use crate::errors::AppError;

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}

pub fn set_flash(session: &Session, message: &str) -> Result<(), AppError> {
    session
        .insert("flash", message)
        .map_err(|e| AppError::Session(format!("Failed to store flash message: {e}")))
}
