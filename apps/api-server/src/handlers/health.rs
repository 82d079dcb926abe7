//! Liveness endpoint.
//!
//! GET /health answers as soon as the server is up; by then the schema
//! initializer has already gated startup, so "up" implies the store was
//! reachable at least once.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthReport {
    pub service: &'static str,
    pub status: &'static str,
    pub version: &'static str,
    pub checked_at: String,
}

pub async fn health_check(_state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthReport {
        service: "inkpost-api",
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        checked_at: chrono::Utc::now().to_rfc3339(),
    })
}
