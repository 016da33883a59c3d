use actix_web::{web, HttpServer};
use bind_api::{
    app::create_app,
    config,
    routes::{AppState, SERVICE_NAME},
};
use bind_core::BindInfoService;
use bind_infra::GarenaBindInfoGateway;
use log::info;
use std::{io, sync::Arc, time::Duration};

#[actix_web::main]
async fn main() -> io::Result<()> {
    let app_config = config::load();
    config::init_logger(&app_config.logging);

    info!(
        "Starting {} ({} environment)",
        SERVICE_NAME,
        app_config.environment.as_str()
    );

    let gateway = GarenaBindInfoGateway::new(app_config.upstream.clone()).map_err(|e| {
        log::error!("Failed to initialize bind info gateway: {}", e);
        io::Error::new(io::ErrorKind::Other, e)
    })?;
    info!("Forwarding bind info lookups to {}", app_config.upstream.url);

    let app_state = web::Data::new(AppState::new(BindInfoService::new(Arc::new(gateway))));

    let bind_address = app_config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let cors_config = app_config.cors.clone();
    let environment = app_config.environment;

    let mut server = HttpServer::new(move || {
        create_app(app_state.clone(), &cors_config, environment)
    })
    .keep_alive(Duration::from_secs(app_config.server.keep_alive));

    if app_config.server.workers > 0 {
        server = server.workers(app_config.server.workers);
    }

    server.bind(&bind_address)?.run().await
}
