//! Response bodies that are not posts.

use serde::{Deserialize, Serialize};

/// Error body returned with every 4xx/5xx response: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    // Common error bodies
    pub fn not_found() -> Self {
        Self::new("not found")
    }

    pub fn text_required() -> Self {
        Self::new("text is required")
    }

    pub fn internal_error() -> Self {
        Self::new("internal server error")
    }
}

/// Liveness probe body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl HealthResponse {
    pub fn ok(version: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            version: Some(version.into()),
        }
    }
}
