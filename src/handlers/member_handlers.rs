use actix_session::Session;
use actix_web::{HttpResponse, web};

use super::{CsrfForm, see_other};
use crate::errors::AppError;
use crate::models::member::{self, MemberForm, MemberUpdate};
use crate::models::StoreError;
use crate::session::{csrf, set_flash};
use crate::state::AppState;

pub async fn create(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<MemberForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    if let Some(err) = member::validate_name(&form.name) {
        set_flash(&session, &err)?;
        return Ok(see_other("/dashboard"));
    }

    let name = form.name.trim();
    match state.members.create(name).await {
        Ok(m) => set_flash(&session, &format!("Added {}", m.name))?,
        Err(e) => {
            log::error!("Error adding member: {e}");
            set_flash(&session, &format!("Could not add '{name}'. Please try again."))?;
        }
    }
    Ok(see_other("/dashboard"))
}

pub async fn toggle(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<CsrfForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    let members = state.members.list().await?;
    let current = members.iter().find(|m| m.id == id).ok_or(AppError::NotFound)?;
    let next = current.status.toggled();

    match state.members.update(&id, &MemberUpdate::status(next)).await {
        Ok(()) => set_flash(&session, &format!("{} is now {}", current.name, next.label().to_lowercase()))?,
        Err(StoreError::NotFound(_)) => return Err(AppError::NotFound),
        Err(e) => {
            log::error!("Error updating member {id}: {e}");
            set_flash(&session, "Could not change the member's status. Please try again.")?;
        }
    }
    Ok(see_other("/dashboard"))
}

pub async fn delete(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<CsrfForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    match state.members.delete(&id).await {
        Ok(()) => set_flash(&session, "Member deleted")?,
        Err(StoreError::NotFound(_)) => return Err(AppError::NotFound),
        Err(e) => {
            log::error!("Error deleting member {id}: {e}");
            set_flash(&session, "Could not delete the member. Please try again.")?;
        }
    }
    Ok(see_other("/dashboard"))
}
