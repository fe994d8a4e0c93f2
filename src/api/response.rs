use serde::Serialize;
use uuid::Uuid;

/// Response to a successful process request.
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    /// Identifier for later score lookup
    pub id: Uuid,
}

/// Response to a successful points lookup.
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub rules: usize,
    pub receipts: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.into(),
            code: code.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ErrorResponse::new(message, "BAD_REQUEST")
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ErrorResponse::new(message, "NOT_FOUND")
    }
}
