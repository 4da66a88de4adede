//! Response body of the `/health` endpoint.

use serde::Serialize;

/// Overall status, crate version and the link store check.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Checks run by the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    /// Whether the link store answers, with its current link count.
    pub store: CheckStatus,
}

/// Result of one check: `ok` or `error`, plus a short detail.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
