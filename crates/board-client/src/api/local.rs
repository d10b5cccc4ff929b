use std::sync::Arc;

use async_trait::async_trait;
use board_core::error::DomainError;
use board_core::{BoardService, Post};
use board_shared::ErrorBody;

use super::{ApiError, BoardApi};

/// Runs the board service in the same process, with no server of record.
#[derive(Clone)]
pub struct LocalBoardApi {
    service: Arc<BoardService>,
}

impl LocalBoardApi {
    pub fn new(service: Arc<BoardService>) -> Self {
        Self { service }
    }
}

/// Mirror the status codes and messages the API server would send.
fn rejected(err: DomainError) -> ApiError {
    let (status, body) = match err {
        DomainError::Validation(e) => (400, ErrorBody::new(e.to_string())),
        DomainError::NotFound { .. } => (404, ErrorBody::not_found()),
        DomainError::Storage(e) => {
            tracing::error!(error = %e, "Local board storage failed");
            (500, ErrorBody::internal_error())
        }
    };
    ApiError::Rejected {
        status,
        message: body.error,
    }
}

#[async_trait]
impl BoardApi for LocalBoardApi {
    async fn list(&self) -> Result<Vec<Post>, ApiError> {
        Ok(self.service.list().await)
    }

    async fn create(&self, text: &str) -> Result<Post, ApiError> {
        self.service.create(text).await.map_err(rejected)
    }

    async fn update(&self, id: &str, text: &str) -> Result<Post, ApiError> {
        self.service.update(id, text).await.map_err(rejected)
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.service.delete(id).await.map_err(rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_infra::InMemoryPostStore;

    fn api() -> LocalBoardApi {
        LocalBoardApi::new(Arc::new(BoardService::new(Arc::new(InMemoryPostStore::new()))))
    }

    #[tokio::test]
    async fn test_round_trip() {
        let api = api();
        let post = api.create(" hi ").await.unwrap();
        assert_eq!(api.list().await.unwrap(), vec![post]);
    }

    #[tokio::test]
    async fn test_errors_match_server_responses() {
        let api = api();

        match api.create("").await.unwrap_err() {
            ApiError::Rejected { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "text is required");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        match api.delete("nope").await.unwrap_err() {
            ApiError::Rejected { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
