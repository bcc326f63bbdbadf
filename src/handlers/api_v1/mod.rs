pub mod members;
pub mod notices;
pub mod organize;
pub mod settings;

use actix_web::{
    web, Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
};

use crate::models::StoreError;
use crate::templates_structs::ApiErrorResponse;

/// Rejects POST/PUT/DELETE requests without `Content-Type: application/json`.
/// A plain cross-site form post cannot set that header, so this doubles as
/// the API's CSRF guard. GET requests pass through.
pub async fn require_json_content_type(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let method = req.method().clone();

    if method == actix_web::http::Method::POST
        || method == actix_web::http::Method::PUT
        || method == actix_web::http::Method::DELETE
    {
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !content_type.starts_with("application/json") {
            let body = ApiErrorResponse::new("Content-Type must be application/json for mutation requests");
            let response = HttpResponse::BadRequest().json(body);
            return Ok(req.into_response(response).map_into_right_body());
        }
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}

/// JSON response for a failed store call.
pub(crate) fn store_error_response(e: StoreError) -> HttpResponse {
    match e {
        StoreError::NotFound(id) => HttpResponse::NotFound().json(ApiErrorResponse {
            error: "Member not found".to_string(),
            details: Some(id),
        }),
        other => {
            log::error!("API store error: {other}");
            HttpResponse::InternalServerError().json(ApiErrorResponse {
                error: "Storage error".to_string(),
                details: Some(other.to_string()),
            })
        }
    }
}

/// Configure API v1 routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/members")
            .route("", web::get().to(members::list))
            .route("", web::post().to(members::create))
            .route("/{id}", web::put().to(members::update))
            .route("/{id}", web::delete().to(members::delete)),
    );
    cfg.service(
        web::scope("/settings")
            .route("", web::get().to(settings::read))
            .route("", web::put().to(settings::update)),
    );
    cfg.route("/generate", web::post().to(organize::generate))
        .route("/notify", web::post().to(organize::notify))
        .route("/minutes", web::post().to(notices::minutes))
        .route("/notice", web::post().to(notices::notice))
        .route("/finalize/meeting", web::post().to(notices::finalize_meeting))
        .route("/finalize/assignment", web::post().to(notices::finalize_assignment));
}
