//! Domain-level error types.

use thiserror::Error;

/// Reasons a piece of post text is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("text is required")]
    Required,

    #[error("text must be at most {max} characters")]
    TooLong { max: usize },
}

/// Storage-level errors. Only writes can fail; reads fall back to an empty board.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to write board data: {0}")]
    Write(#[from] std::io::Error),

    #[error("Failed to encode board data: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Post not found: {id}")]
    NotFound { id: String },

    #[error(transparent)]
    Storage(#[from] StoreError),
}
