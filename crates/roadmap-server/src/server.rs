use actix_web::{
    http::Method,
    middleware::{DefaultHeaders, Logger},
    web, App, HttpServer,
};
use std::io;

use crate::config::ServerConfig;
use crate::handlers;
use crate::state::AppState;

pub const API_SCOPE: &str = "/api/v1";
pub const GENERATE_ROADMAP_PATH: &str = "/generate-roadmap";
pub const HEALTH_PATH: &str = "/health";

pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// CORS headers attached to every response, errors and preflight included.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", CORS_ALLOW_ORIGIN))
        .add(("Access-Control-Allow-Headers", CORS_ALLOW_HEADERS))
}

fn preflight_route() -> actix_web::Route {
    web::method(Method::OPTIONS).to(handlers::preflight::handler)
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(API_SCOPE)
            .service(
                web::resource(GENERATE_ROADMAP_PATH)
                    .app_data(web::PayloadConfig::new(
                        handlers::generate::MAX_REQUEST_BODY_BYTES,
                    ))
                    .route(preflight_route())
                    .route(web::post().to(handlers::generate::handler)),
            )
            .service(
                web::resource(HEALTH_PATH)
                    .route(preflight_route())
                    .route(web::get().to(handlers::health::handler)),
            ),
    )
    .default_service(web::to(handlers::preflight::fallback));
}

pub async fn run_server(config: ServerConfig) -> io::Result<()> {
    let state = web::Data::new(AppState::from_config(&config));
    let bind_address = config.bind_address();

    log::info!("Starting roadmap server on http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors_headers())
            .wrap(Logger::default())
            .configure(app_config)
    })
    .bind(bind_address)?
    .run()
    .await
}
