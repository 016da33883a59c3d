use actix_web::{http::header::ContentType, HttpResponse};

const DOCUMENTATION_PAGE: &str = include_str!("home.html");

/// Home page with API documentation
pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(DOCUMENTATION_PAGE)
}
