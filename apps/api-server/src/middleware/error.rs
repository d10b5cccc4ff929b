//! Error handling - `{"error": "..."}` responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use board_core::error::DomainError;
use board_shared::ErrorBody;
use std::fmt;

/// Application-level error type that converts to JSON error responses.
#[derive(Debug)]
pub enum AppError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound => write!(f, "Not found"),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound => ErrorBody::not_found(),
            AppError::BadRequest(detail) => ErrorBody::new(detail.as_str()),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorBody::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(e) => AppError::BadRequest(e.to_string()),
            DomainError::NotFound { .. } => AppError::NotFound,
            DomainError::Storage(e) => AppError::Internal(e.to_string()),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
