use actix_web::{http::Method, HttpRequest, HttpResponse};

use crate::error::AppError;

/// CORS preflight. Answers before any configuration or upstream work.
pub async fn handler() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// Fallback for unmatched routes: preflight for `OPTIONS`, 404 otherwise.
pub async fn fallback(req: HttpRequest) -> Result<HttpResponse, AppError> {
    if req.method() == Method::OPTIONS {
        return Ok(handler().await);
    }

    log::debug!("No route for {} {}", req.method(), req.path());
    Err(AppError::NotFound(req.path().to_string()))
}
