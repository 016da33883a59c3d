//! API response types shared by every endpoint

use serde::{Deserialize, Serialize};

/// Value of the top-level `status` field in every JSON body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
    Healthy,
}

/// Health check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `healthy` while the process can answer
    pub status: ResponseStatus,

    /// Human-readable service name
    pub service: String,

    /// API contract version
    pub version: String,
}

impl HealthResponse {
    pub fn healthy(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Healthy,
            service: service.into(),
            version: version.into(),
        }
    }
}
