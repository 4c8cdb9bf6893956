//! Handler for the health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Liveness probe.
///
/// # Endpoint
///
/// `GET /health`
///
/// Always returns 200 and performs no data access, so it answers even while
/// the store is unreachable.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { message: "OK" })
}
