//! Application state - shared across all handlers.

use std::sync::Arc;

use board_core::BoardService;
use board_core::ports::PostStore;
use board_infra::{InMemoryPostStore, JsonFileStore};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub board: Arc<BoardService>,
}

impl AppState {
    /// Build the application state with the configured store.
    pub fn new(config: &AppConfig) -> Self {
        let store: Arc<dyn PostStore> = match &config.data_file {
            Some(path) => {
                tracing::info!(path = %path.display(), "Using JSON file store");
                Arc::new(JsonFileStore::new(path.clone()))
            }
            None => {
                tracing::warn!("DATA_FILE is empty. Posts are kept in memory only.");
                Arc::new(InMemoryPostStore::new())
            }
        };

        Self::with_store(store)
    }

    pub fn with_store(store: Arc<dyn PostStore>) -> Self {
        Self {
            board: Arc::new(BoardService::new(store)),
        }
    }
}
