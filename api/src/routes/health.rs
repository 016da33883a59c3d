use actix_web::HttpResponse;
use bind_shared::HealthResponse;

use super::{API_VERSION, SERVICE_NAME};

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(SERVICE_NAME, API_VERSION))
}
