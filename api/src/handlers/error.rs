//! Mapping of lookup errors onto HTTP responses

use actix_web::{http::StatusCode, HttpResponse};
use bind_core::BindInfoError;

use crate::dto::ErrorResponse;

/// 400 for caller mistakes (missing token, upstream said 400), 500 otherwise
pub fn status_for(error: &BindInfoError) -> StatusCode {
    if error.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Build the JSON error response for a failed lookup
pub fn error_response(error: &BindInfoError) -> HttpResponse {
    HttpResponse::build(status_for(error)).json(ErrorResponse::from(error))
}
