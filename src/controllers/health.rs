use axum::{http::StatusCode, Json};

use crate::domain::podcast::HealthResponse;

/// GET /health - Liveness probe, never gated by the API key
pub async fn health() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}
