//! Application factory
//!
//! Builds the actix-web `App` with its middleware stack and routes. All
//! dependencies arrive through `AppState`; nothing is global.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    guard::{self, Guard},
    web, App, HttpResponse,
};
use bind_core::BindInfoGateway;
use bind_shared::{CorsConfig, Environment};

use crate::dto::ErrorResponse;
use crate::middleware::{cors::create_cors, security::SecurityMiddleware};
use crate::routes::{bind_info::bind_info, health::health_check, home::home, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<G>(
    app_state: web::Data<AppState<G>>,
    cors_config: &CorsConfig,
    environment: Environment,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    G: BindInfoGateway + 'static,
{
    App::new()
        .app_data(app_state)
        // Middleware (last registered runs first)
        .wrap(SecurityMiddleware::for_environment(environment))
        .wrap(create_cors(cors_config))
        .wrap(Logger::default())
        .service(read_only_resource("/").route(web::route().guard(get_or_head()).to(home)))
        .service(
            read_only_resource("/health").route(web::route().guard(get_or_head()).to(health_check)),
        )
        .service(
            read_only_resource("/bind_info")
                .route(web::route().guard(get_or_head()).to(bind_info::<G>)),
        )
        .default_service(web::route().to(not_found))
}

/// Every route answers GET, and HEAD alongside it
fn get_or_head() -> impl Guard {
    guard::Any(guard::Get()).or(guard::Head())
}

/// A resource that rejects any unrouted method with 405
fn read_only_resource(path: &str) -> actix_web::Resource {
    web::resource(path).default_service(web::route().to(method_not_allowed))
}

async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header((actix_web::http::header::ALLOW, "GET, HEAD"))
        .json(ErrorResponse::new("The method is not allowed for the requested URL"))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("The requested resource was not found"))
}
