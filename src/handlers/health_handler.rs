//! Liveness and readiness handlers. No auth, no service layer.

use std::time::Instant;

use actix_web::{web, HttpResponse};
use chrono::Utc;
use lazy_static::lazy_static;
use sqlx::PgPool;

use crate::constants::{MSG_ALL_OPERATIONAL, MSG_SERVER_RUNNING};

lazy_static! {
    static ref STARTED_AT: Instant = Instant::now();
}

/// Record the process start time. Called once from main so uptime in
/// `/health/detailed` measures from boot, not from the first request.
pub fn mark_started() {
    lazy_static::initialize(&STARTED_AT);
}

/// Basic liveness probe
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is up")
    )
)]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "OK",
        "message": MSG_SERVER_RUNNING,
        "timestamp": Utc::now().to_rfc3339(),
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness probe including a live database round trip
#[utoipa::path(
    get,
    path = "/api/v1/health/detailed",
    tag = "Health",
    responses(
        (status = 200, description = "Component statuses")
    )
)]
pub async fn health_detailed(pool: web::Data<PgPool>) -> HttpResponse {
    let database_ok = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool.get_ref())
        .await
        .is_ok();

    HttpResponse::Ok().json(serde_json::json!({
        "status": if database_ok { "OK" } else { "DEGRADED" },
        "message": MSG_ALL_OPERATIONAL,
        "timestamp": Utc::now().to_rfc3339(),
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {
            "database": if database_ok { "connected" } else { "unreachable" },
        },
        "uptime_seconds": STARTED_AT.elapsed().as_secs(),
    }))
}

/// Minimal ping endpoint
#[utoipa::path(
    get,
    path = "/api/v1/health/ping",
    tag = "Health",
    responses(
        (status = 200, description = "Pong")
    )
)]
pub async fn ping() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "pong",
    }))
}
