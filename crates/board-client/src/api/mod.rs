//! The board view's backend port and its implementations.

mod http;
mod local;

use async_trait::async_trait;
use board_core::Post;
use thiserror::Error;

pub use http::HttpBoardApi;
pub use local::LocalBoardApi;

/// The four CRUD calls the board view makes.
#[async_trait]
pub trait BoardApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Post>, ApiError>;

    async fn create(&self, text: &str) -> Result<Post, ApiError>;

    async fn update(&self, id: &str, text: &str) -> Result<Post, ApiError>;

    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

/// Failures of a backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with an error status and message.
    #[error("{message} ({status})")]
    Rejected { status: u16, message: String },

    #[error("Request failed: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Message shown to the user as the remote error.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { message, .. } => message.clone(),
            ApiError::Network(_) => "could not reach the board server".to_string(),
            ApiError::Decode(_) => "unexpected response from the board server".to_string(),
            ApiError::InvalidUrl(url) => format!("invalid server URL: {url}"),
        }
    }
}

#[async_trait]
impl<T: BoardApi + ?Sized> BoardApi for std::sync::Arc<T> {
    async fn list(&self) -> Result<Vec<Post>, ApiError> {
        (**self).list().await
    }

    async fn create(&self, text: &str) -> Result<Post, ApiError> {
        (**self).create(text).await
    }

    async fn update(&self, id: &str, text: &str) -> Result<Post, ApiError> {
        (**self).update(id, text).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        (**self).delete(id).await
    }
}

#[async_trait]
impl<T: BoardApi + ?Sized> BoardApi for Box<T> {
    async fn list(&self) -> Result<Vec<Post>, ApiError> {
        (**self).list().await
    }

    async fn create(&self, text: &str) -> Result<Post, ApiError> {
        (**self).create(text).await
    }

    async fn update(&self, id: &str, text: &str) -> Result<Post, ApiError> {
        (**self).update(id, text).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        (**self).delete(id).await
    }
}
