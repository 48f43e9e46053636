//! Response DTOs for the formrelay HTTP surface.

use serde::Serialize;

/// Outcome of a request: `{"success": bool, "message": string}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResponse {
    /// Whether the request succeeded.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
}

impl StatusResponse {
    /// Create a success response.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Create a failure response.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Fixed status text.
    pub status: String,
    /// Current time, RFC 3339 in UTC.
    pub timestamp: String,
}
