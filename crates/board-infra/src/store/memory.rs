//! In-memory post store - used by tests and when no data file is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;

use board_core::domain::BoardDocument;
use board_core::error::StoreError;
use board_core::ports::PostStore;

/// In-memory store holding the whole document behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    document: RwLock<BoardDocument>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::with_document(BoardDocument::default())
    }

    pub fn with_document(document: BoardDocument) -> Self {
        Self {
            document: RwLock::new(document),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn load(&self) -> BoardDocument {
        self.document.read().await.clone()
    }

    async fn save(&self, document: &BoardDocument) -> Result<(), StoreError> {
        *self.document.write().await = document.clone();
        Ok(())
    }
}
