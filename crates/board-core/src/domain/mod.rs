//! Domain entities - the core business objects.

mod document;
mod post;

pub use document::BoardDocument;
pub use post::{CreatedAt, MAX_POST_LENGTH, Post, PostId, PostText};
