use crate::RqDbPool;
use actix_web::{get, web, HttpResponse, Responder};
use diesel::prelude::*;
use serde_json::json;

/// Health check endpoint for load balancers
#[get("")]
pub async fn health_check(pool: RqDbPool) -> impl Responder {
    match pool.get() {
        Ok(_) => HttpResponse::Ok().json(json!({
            "status": "healthy",
            "database": "connected"
        })),
        Err(_) => HttpResponse::ServiceUnavailable().json(json!({
            "status": "unhealthy",
            "database": "disconnected"
        })),
    }
}

/// Readiness check - runs a trivial query against the store
#[get("/ready")]
pub async fn readiness_check(pool: RqDbPool) -> impl Responder {
    let ready = pool
        .get()
        .ok()
        .and_then(|mut conn| diesel::sql_query("SELECT 1").execute(&mut conn).ok())
        .is_some();

    if ready {
        HttpResponse::Ok().json(json!({
            "status": "ready",
            "database": "connected"
        }))
    } else {
        HttpResponse::ServiceUnavailable().json(json!({
            "status": "not_ready",
            "database": "disconnected"
        }))
    }
}

/// Liveness check - simple check to see if the app is alive
#[get("/live")]
pub async fn liveness_check() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn routes() -> actix_web::Scope {
    web::scope("/health")
        .service(health_check)
        .service(readiness_check)
        .service(liveness_check)
}
