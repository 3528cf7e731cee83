use actix_web::{get, HttpResponse, Responder};
use chrono::Utc;
use serde::Serialize;

use crate::constants::START_TIME;

#[derive(Serialize)]
struct HealthCheckResponse {
    status: &'static str,
    uptime_seconds: i64,
    timestamp: String,
    version: &'static str,
}

/// Liveness probe for the hosting platform. This service holds no database or
/// cache connection, so a live process is a healthy one.
#[get("/health")]
pub async fn health_check() -> impl Responder {
    let now = Utc::now();

    HttpResponse::Ok().json(HealthCheckResponse {
        status: "ok",
        uptime_seconds: now.signed_duration_since(*START_TIME).num_seconds(),
        timestamp: now.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
