//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/posts` and `PUT /api/posts/{id}`.
///
/// `text` is optional on the wire so that a missing field reaches validation
/// and is reported the same way as blank text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostTextRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl PostTextRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}
