//! Integration tests for the Garena bind info gateway
//!
//! A local actix-web server stands in for the upstream so the real reqwest
//! path (query string, headers, status handling, timeouts) is exercised.

use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{middleware::Compress, web, App, HttpRequest, HttpResponse, HttpServer};
use bind_core::{BindInfoError, BindInfoGateway, BindInfoService};
use bind_infra::GarenaBindInfoGateway;
use bind_shared::UpstreamConfig;
use serde_json::{json, Value};

fn header(req: &HttpRequest, name: &str) -> String {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Echoes what the gateway sent next to a pending-email payload
async fn bind_info(req: HttpRequest, query: web::Query<HashMap<String, String>>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "email": "",
        "email_to_be": "x@y.com",
        "request_exec_countdown": 3661,
        "seen": {
            "app_id": query.get("app_id"),
            "access_token": query.get("access_token"),
            "user_agent": header(&req, "user-agent"),
            "connection": header(&req, "connection"),
            "accept_encoding": header(&req, "accept-encoding"),
        }
    }))
}

async fn unavailable() -> HttpResponse {
    HttpResponse::ServiceUnavailable().body("maintenance window")
}

async fn rejected() -> HttpResponse {
    HttpResponse::BadRequest().finish()
}

async fn garbage() -> HttpResponse {
    HttpResponse::Ok().body("<html>not json</html>")
}

async fn slow() -> HttpResponse {
    actix_web::rt::time::sleep(Duration::from_secs(3)).await;
    HttpResponse::Ok().json(json!({}))
}

/// Start the stand-in upstream and return its base URL
fn spawn_upstream() -> String {
    let server = HttpServer::new(|| {
        App::new()
            .wrap(Compress::default())
            .route("/bind", web::get().to(bind_info))
            .route("/unavailable", web::get().to(unavailable))
            .route("/rejected", web::get().to(rejected))
            .route("/garbage", web::get().to(garbage))
            .route("/slow", web::get().to(slow))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind stand-in upstream");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{}", addr)
}

fn gateway_for(url: String) -> GarenaBindInfoGateway {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    GarenaBindInfoGateway::new(UpstreamConfig::default().with_url(url)).unwrap()
}

#[actix_web::test]
async fn test_request_carries_query_and_headers() {
    let base = spawn_upstream();
    let gateway = gateway_for(format!("{}/bind", base));

    let reply = gateway.fetch("tok en/+=&x").await.unwrap();

    assert_eq!(reply.status, 200);
    let body: Value = serde_json::from_str(&reply.body).unwrap();
    let seen = &body["seen"];
    assert_eq!(seen["app_id"], "100067");
    assert_eq!(seen["access_token"], "tok en/+=&x");
    assert_eq!(seen["user_agent"], "GarenaMSDK/4.0.19P9(Redmi Note 5 ;Android 9;en;US;)");
    assert!(seen["connection"].as_str().unwrap().eq_ignore_ascii_case("keep-alive"));
    assert!(seen["accept_encoding"].as_str().unwrap().contains("gzip"));
}

#[actix_web::test]
async fn test_service_reshapes_gateway_reply() {
    let base = spawn_upstream();
    let service = BindInfoService::new(Arc::new(gateway_for(format!("{}/bind", base))));

    let info = service.get_bind_info("token").await.unwrap();

    assert_eq!(info.pending_email, "x@y.com");
    assert_eq!(info.countdown_seconds, 3661);
    assert_eq!(
        info.summary,
        "Pending email confirmation: x@y.com - Confirms in: 0 Day 1 Hour 1 Min 1 Sec"
    );
    assert_eq!(info.raw_response["seen"]["access_token"], "token");
}

#[actix_web::test]
async fn test_non_200_reply_is_returned_to_the_service() {
    let base = spawn_upstream();
    let gateway = gateway_for(format!("{}/unavailable", base));

    let reply = gateway.fetch("token").await.unwrap();
    assert_eq!(reply.status, 503);
    assert_eq!(reply.body, "maintenance window");

    let service = BindInfoService::new(Arc::new(gateway));
    let err = service.get_bind_info("token").await.unwrap_err();
    assert_eq!(err.to_string(), "API returned status code: 503");
    assert_eq!(err.response_snippet(), Some("maintenance window"));
}

#[actix_web::test]
async fn test_upstream_400_with_empty_body() {
    let base = spawn_upstream();
    let service = BindInfoService::new(Arc::new(gateway_for(format!("{}/rejected", base))));

    let err = service.get_bind_info("token").await.unwrap_err();

    assert_eq!(err.status_code(), Some(400));
    assert_eq!(err.response_snippet(), Some("No response body"));
    assert!(err.is_client_error());
}

#[actix_web::test]
async fn test_malformed_body_is_unexpected() {
    let base = spawn_upstream();
    let service = BindInfoService::new(Arc::new(gateway_for(format!("{}/garbage", base))));

    let err = service.get_bind_info("token").await.unwrap_err();

    assert!(matches!(err, BindInfoError::Unexpected(_)));
}

#[actix_web::test]
async fn test_slow_upstream_times_out() {
    let base = spawn_upstream();
    let config = UpstreamConfig::default()
        .with_url(format!("{}/slow", base))
        .with_timeout_secs(1);
    let gateway = GarenaBindInfoGateway::new(config).unwrap();

    let err = gateway.fetch("token").await.unwrap_err();

    assert_eq!(err, BindInfoError::Timeout { seconds: 1 });
    assert_eq!(err.to_string(), "Request timeout (1 seconds)");
}

#[actix_web::test]
async fn test_unreachable_upstream_is_a_connection_error() {
    // Grab a free port, then release it so nothing is listening there.
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let gateway = gateway_for(format!("http://127.0.0.1:{}/bind", port));

    let err = gateway.fetch("token").await.unwrap_err();

    assert_eq!(err, BindInfoError::Connection);
    assert_eq!(err.to_string(), "Connection error - cannot reach Garena API");
}
