//! Board service - CRUD over posts on top of a [`PostStore`].

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::{Post, PostText};
use crate::error::DomainError;
use crate::ports::PostStore;

/// The API service logic: each call runs a full load/mutate/save cycle.
///
/// Mutations within one process are serialized so that concurrent requests
/// cannot interleave their read-modify-write cycles.
pub struct BoardService {
    store: Arc<dyn PostStore>,
    writer: Mutex<()>,
}

impl BoardService {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self {
            store,
            writer: Mutex::new(()),
        }
    }

    /// All posts, newest first.
    pub async fn list(&self) -> Vec<Post> {
        self.store.load().await.posts
    }

    /// Validate `text`, then prepend a new post and persist it.
    pub async fn create(&self, text: &str) -> Result<Post, DomainError> {
        let text = PostText::parse(text)?;

        let _guard = self.writer.lock().await;
        let mut document = self.store.load().await;
        let post = Post::new(text, Utc::now(), document.ids());
        document.posts.insert(0, post.clone());
        self.store.save(&document).await?;

        tracing::debug!(post_id = %post.id, "Post created");
        Ok(post)
    }

    /// Replace the text of the post with `id`.
    pub async fn update(&self, id: &str, text: &str) -> Result<Post, DomainError> {
        let text = PostText::parse(text)?;

        let _guard = self.writer.lock().await;
        let mut document = self.store.load().await;
        let index = document.position(id).ok_or_else(|| DomainError::NotFound {
            id: id.to_string(),
        })?;
        document.posts[index].text = text.into_inner();
        self.store.save(&document).await?;

        tracing::debug!(post_id = %id, "Post updated");
        Ok(document.posts[index].clone())
    }

    /// Remove the post with `id`.
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let _guard = self.writer.lock().await;
        let mut document = self.store.load().await;
        let index = document.position(id).ok_or_else(|| DomainError::NotFound {
            id: id.to_string(),
        })?;
        document.posts.remove(index);
        self.store.save(&document).await?;

        tracing::debug!(post_id = %id, "Post deleted");
        Ok(())
    }
}
