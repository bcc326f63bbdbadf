use actix_web::{HttpResponse, web};

use super::store_error_response;
use crate::models::member::{self, MemberUpdate};
use crate::state::AppState;
use crate::templates_structs::{ApiCreateMemberRequest, ApiErrorResponse};

/// GET /api/v1/members - Full roster, oldest first
pub async fn list(state: web::Data<AppState>) -> HttpResponse {
    match state.members.list().await {
        Ok(members) => HttpResponse::Ok().json(members),
        Err(e) => store_error_response(e),
    }
}

/// POST /api/v1/members - Add an active member with zeroed counters
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<ApiCreateMemberRequest>,
) -> HttpResponse {
    if let Some(err) = member::validate_name(&body.name) {
        return HttpResponse::BadRequest().json(ApiErrorResponse::new(err));
    }

    match state.members.create(body.name.trim()).await {
        Ok(m) => {
            log::info!("Member '{}' added via API", m.name);
            HttpResponse::Created().json(m)
        }
        Err(e) => store_error_response(e),
    }
}

/// PUT /api/v1/members/{id} - Partial update; returns the updated member
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<MemberUpdate>,
) -> HttpResponse {
    let id = path.into_inner();
    let mut changes = body.into_inner();

    if changes.is_empty() {
        return HttpResponse::BadRequest().json(ApiErrorResponse::new("No fields to update"));
    }
    if let Some(name) = &changes.name {
        if let Some(err) = member::validate_name(name) {
            return HttpResponse::BadRequest().json(ApiErrorResponse::new(err));
        }
        changes.name = Some(name.trim().to_string());
    }

    // Counters may be raised here but never lowered.
    if changes.absent_count.is_some() || changes.missed_assignment_count.is_some() {
        let current = match state.members.list().await {
            Ok(members) => members.into_iter().find(|m| m.id == id),
            Err(e) => return store_error_response(e),
        };
        let Some(current) = current else {
            return HttpResponse::NotFound().json(ApiErrorResponse::new("Member not found"));
        };
        if let Some(counter) = changes.lowered_counter(&current) {
            return HttpResponse::BadRequest()
                .json(ApiErrorResponse::new(format!("{} cannot be lowered", counter.field())));
        }
    }

    if let Err(e) = state.members.update(&id, &changes).await {
        return store_error_response(e);
    }
    match state.members.list().await {
        Ok(members) => match members.into_iter().find(|m| m.id == id) {
            Some(m) => HttpResponse::Ok().json(m),
            None => HttpResponse::NotFound().json(ApiErrorResponse::new("Member not found")),
        },
        Err(e) => store_error_response(e),
    }
}

/// DELETE /api/v1/members/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    match state.members.delete(&id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => store_error_response(e),
    }
}
