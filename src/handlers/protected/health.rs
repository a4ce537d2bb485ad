use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::app::AppState;
use crate::error::ErrorBody;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    /// `ok` or `degraded`.
    pub status: String,
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: DateTime<Utc>,
    /// `ok` or `unavailable`.
    pub database: String,
}

/// GET /api/v1/health - liveness plus a store ping
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service and store reachable", body = HealthStatus),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 503, description = "Store unreachable", body = HealthStatus)
    ),
    tag = "Health",
    security(("bearer_auth" = []))
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let timestamp = Utc::now();

    match state.db.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthStatus {
                status: "ok".to_string(),
                timestamp,
                database: "ok".to_string(),
            }),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthStatus {
                    status: "degraded".to_string(),
                    timestamp,
                    database: "unavailable".to_string(),
                }),
            )
        }
    }
}
