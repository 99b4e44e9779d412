//! Health check endpoints

use axum::{extract::State, response::IntoResponse, Json};
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{info, warn};

use crate::{
    context::ReportsContext,
    models::{HealthCheckResult, HealthResponse, HealthStatus},
};

/// Liveness of the API process itself
pub async fn health_check() -> impl IntoResponse {
    info!("Health check requested");

    Json(HealthResponse::healthy())
}

/// Health of the API and its data source
///
/// Always answers 200; the body's `status` reflects the worst check.
pub async fn health_check_detailed(State(ctx): State<ReportsContext>) -> impl IntoResponse {
    info!("Detailed health check requested");

    let mut checks = BTreeMap::new();

    let started = Instant::now();
    let source_health = match ctx.service.health_check().await {
        Ok(()) => match ctx.service.record_count().await {
            Ok(count) => HealthCheckResult {
                status: HealthStatus::Healthy,
                message: Some(format!("{} reports available", count)),
                duration_ms: Some(started.elapsed().as_millis() as u64),
            },
            Err(e) => {
                warn!("Report count failed during health check: {}", e);
                HealthCheckResult {
                    status: HealthStatus::Degraded,
                    message: Some("Data source reachable but record count failed".to_string()),
                    duration_ms: Some(started.elapsed().as_millis() as u64),
                }
            }
        },
        Err(e) => {
            warn!("Data source health check failed: {}", e);
            HealthCheckResult {
                status: HealthStatus::Unhealthy,
                message: Some("Data source unavailable".to_string()),
                duration_ms: Some(started.elapsed().as_millis() as u64),
            }
        }
    };
    checks.insert("data_source".to_string(), source_health);

    Json(HealthResponse::healthy().with_checks(checks))
}
