//! # Board Infrastructure
//!
//! Concrete implementations of the ports defined in `board-core`.

pub mod store;

pub use store::{InMemoryPostStore, JsonFileStore};
