use actix_web::{
    http::header::{HeaderName, HeaderValue},
    web, HttpRequest, HttpResponse,
};
use bind_core::{BindInfoError, BindInfoGateway, BindInfoService};
use bind_shared::utils::mask_token;
use std::sync::Arc;
use uuid::Uuid;

use crate::dto::{BindInfoQuery, BindInfoResponse};
use crate::handlers::error_response;

/// Application state that holds shared services
pub struct AppState<G>
where
    G: BindInfoGateway,
{
    pub bind_info_service: Arc<BindInfoService<G>>,
}

impl<G: BindInfoGateway> AppState<G> {
    pub fn new(bind_info_service: BindInfoService<G>) -> Self {
        Self {
            bind_info_service: Arc::new(bind_info_service),
        }
    }
}

/// Handler for GET /bind_info
///
/// Forwards the caller's access token to the upstream once and returns the
/// reshaped bind info.
///
/// # Query
///
/// `access_token` (required)
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "status": "success",
///     "status_code": 200,
///     "data": {
///         "current_email": "",
///         "pending_email": "x@y.com",
///         "countdown_seconds": 3661,
///         "countdown_human": "0 Day 1 Hour 1 Min 1 Sec",
///         "raw_response": { "...": "..." }
///     },
///     "summary": "Pending email confirmation: x@y.com - Confirms in: 0 Day 1 Hour 1 Min 1 Sec"
/// }
/// ```
///
/// ## Errors
/// 400 when the token is missing or the upstream answered 400, 500 otherwise.
pub async fn bind_info<G>(req: HttpRequest, state: web::Data<AppState<G>>) -> HttpResponse
where
    G: BindInfoGateway + 'static,
{
    let request_id = Uuid::new_v4().to_string();
    let start_time = std::time::Instant::now();

    let query = BindInfoQuery::parse(req.query_string());
    let Some(access_token) = query.access_token else {
        log::warn!("[{}] Rejected bind_info request without access_token", request_id);
        return with_request_id(error_response(&BindInfoError::MissingAccessToken), &request_id);
    };

    log::info!(
        "[{}] Processing bind_info request for token: {}",
        request_id,
        mask_token(&access_token)
    );

    let response = match state.bind_info_service.get_bind_info(&access_token).await {
        Ok(info) => {
            log::info!(
                "[{}] Bind info lookup succeeded in {} ms",
                request_id,
                start_time.elapsed().as_millis()
            );
            HttpResponse::Ok().json(BindInfoResponse::from(info))
        }
        Err(error) => {
            log::error!(
                "[{}] Bind info lookup failed in {} ms: {}",
                request_id,
                start_time.elapsed().as_millis(),
                error
            );
            error_response(&error)
        }
    };

    with_request_id(response, &request_id)
}

fn with_request_id(mut response: HttpResponse, request_id: &str) -> HttpResponse {
    if let Ok(value) = HeaderValue::from_str(request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static("x-request-id"), value);
    }
    response
}
