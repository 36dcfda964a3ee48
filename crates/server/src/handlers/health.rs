//! Health check endpoints.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::db::pool::health_check as db_health_check;
use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Health status ("ok" or "unhealthy")
    pub status: String,
}

/// Detailed health check response for the API.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiHealthResponse {
    /// Overall health status
    pub status: String,

    /// Database connectivity status
    pub database: String,

    /// Server uptime in seconds
    pub uptime_seconds: u64,

    /// Server name
    pub server_name: String,

    /// Server version
    pub version: String,
}

/// Basic health check endpoint.
///
/// `GET /health`
///
/// Suitable for load balancer probes; never touches the database.
pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
    })
}

/// Detailed API health check endpoint.
///
/// `GET /api/health`
///
/// # Returns
///
/// - `200 OK` if the database is reachable
/// - `503 Service Unavailable` otherwise
pub async fn api_health(State(state): State<AppState>) -> (StatusCode, Json<ApiHealthResponse>) {
    let db_healthy = db_health_check(&state.db).await;

    if !db_healthy {
        tracing::warn!("Database health check failed");
    }

    let (status, database, status_code) = if db_healthy {
        ("ok", "connected", StatusCode::OK)
    } else {
        ("unhealthy", "disconnected", StatusCode::SERVICE_UNAVAILABLE)
    };

    let response = ApiHealthResponse {
        status: status.to_string(),
        database: database.to_string(),
        uptime_seconds: state.uptime_seconds(),
        server_name: state.config.server_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (status_code, Json(response))
}
