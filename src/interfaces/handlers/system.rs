use actix_web::{web, HttpResponse, Responder};
use humantime::format_duration;
use chrono::Utc;
use serde::Serialize;
use std::time::Duration;
use tracing::instrument;

use crate::{constants::START_TIME, use_cases::extractors::AdminClaims, AppState};

#[derive(Serialize)]
struct HealthCheckResponse {
    status: &'static str,
    uptime: String,
    timestamp: String,
    start_at: String,
    storage_backend: &'static str,
    storage: &'static str,
    version: &'static str,
}

#[instrument(skip(_claims, state))]
pub async fn admin_health_check(
    _claims: AdminClaims,
    state: web::Data<AppState>,
) -> impl Responder {
    let now_utc = Utc::now();
    let uptime_duration = now_utc.signed_duration_since(*START_TIME);
    let human_uptime = format_duration(Duration::from_secs(uptime_duration.num_seconds().max(0) as u64));

    let storage = match state.storage.check_connection().await {
        Ok(()) => "OK",
        Err(e) => {
            tracing::error!("Storage health check failed: {}", e);
            "Unavailable"
        }
    };

    let response = HealthCheckResponse {
        status: if storage == "OK" { "healthy" } else { "degraded" },
        uptime: human_uptime.to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        storage_backend: state.storage.name(),
        storage,
        version: env!("CARGO_PKG_VERSION"),
    };

    if storage == "OK" {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
