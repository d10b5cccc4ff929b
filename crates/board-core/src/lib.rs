//! # Board Core
//!
//! The domain layer of the bulletin board.
//! Posts, text validation, the storage port and the CRUD service live here;
//! concrete storage backends are provided by `board-infra`.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use domain::{BoardDocument, CreatedAt, MAX_POST_LENGTH, Post, PostId, PostText};
pub use error::{DomainError, StoreError, ValidationError};
pub use service::BoardService;
