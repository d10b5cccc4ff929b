use serde::{Deserialize, Serialize};

use super::post::{Post, PostId};

/// The persisted board: every post, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDocument {
    #[serde(default)]
    pub posts: Vec<Post>,
}

impl BoardDocument {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Index of the post with `id`, if present.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.posts.iter().position(|p| p.id == *id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &PostId> {
        self.posts.iter().map(|p| &p.id)
    }
}
