//! HTTP handlers and route configuration.

mod health;
mod posts;
mod rpc;

use actix_web::web;

/// Configure all application routes. Both transports share the same service
/// layer: the JSON-RPC surface is the single `POST /api` endpoint, the REST
/// surface lives under `/posts`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        // JSON-RPC surface: single endpoint, method dispatch
        .route("/api", web::post().to(rpc::dispatch))
        // REST surface
        .service(
            web::scope("/posts")
                .route("", web::post().to(posts::create))
                .route("", web::get().to(posts::list))
                .route("/{id}", web::get().to(posts::get)),
        );
}
