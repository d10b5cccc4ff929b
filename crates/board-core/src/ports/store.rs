use async_trait::async_trait;

use crate::domain::BoardDocument;
use crate::error::StoreError;

/// Storage accessor - the read/write boundary to the persisted board document.
///
/// Every call reads or rewrites the whole document; implementations do not cache.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Load the current document.
    ///
    /// Missing or unreadable data yields an empty board instead of an error.
    async fn load(&self) -> BoardDocument;

    /// Overwrite the stored document with `document`.
    async fn save(&self, document: &BoardDocument) -> Result<(), StoreError>;
}
