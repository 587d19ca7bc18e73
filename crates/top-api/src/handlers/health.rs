//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use top_service::dto::{HealthChecks, HealthResponse, ReadinessResponse};
use tracing::warn;

use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check with dependency health
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let database = match sqlx::query("SELECT 1")
        .execute(state.pool())
        .await
    {
        Ok(_) => "healthy",
        Err(e) => {
            warn!(error = %e, "Database readiness check failed");
            "unhealthy"
        }
    };

    let response = ReadinessResponse::from_checks(HealthChecks {
        database: database.to_string(),
    });
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
