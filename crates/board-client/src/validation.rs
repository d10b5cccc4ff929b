//! Input validation shared by the draft and edit buffers.

use board_core::{MAX_POST_LENGTH, PostText, ValidationError};

pub const CONTENT_REQUIRED: &str = "content required";
pub const CONTENT_TOO_LONG: &str = "must be at most 500 characters";

/// Validate a text buffer, returning the message to show next to it.
pub fn validate(value: &str) -> Option<&'static str> {
    match PostText::parse(value) {
        Ok(_) => None,
        Err(ValidationError::Required) => Some(CONTENT_REQUIRED),
        Err(ValidationError::TooLong { .. }) => Some(CONTENT_TOO_LONG),
    }
}

/// Character counter shown under a text buffer, e.g. `"12 / 500"`.
pub fn counter(value: &str) -> String {
    format!("{} / {}", value.chars().count(), MAX_POST_LENGTH)
}
