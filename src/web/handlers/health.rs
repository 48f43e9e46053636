//! Health check handler.

use axum::Json;
use chrono::Utc;

use crate::datetime::to_iso8601;
use crate::web::dto::HealthResponse;

/// Fixed status text reported by the health check.
pub const HEALTH_STATUS: &str = "Server is running";

/// GET /health - Liveness probe.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTH_STATUS.to_string(),
        timestamp: to_iso8601(&Utc::now()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[tokio::test]
    async fn test_health_check() {
        let Json(response) = health_check().await;
        assert_eq!(response.status, "Server is running");
        assert!(response.timestamp.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&response.timestamp).is_ok());
    }
}
