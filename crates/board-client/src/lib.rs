//! # Board Client
//!
//! The board view: client-side state for listing, paging, drafting and
//! editing posts, driven through a [`BoardApi`] backend.
//!
//! Two backends are provided:
//! - [`HttpBoardApi`] talks to the API server over HTTP;
//! - [`LocalBoardApi`] runs the board service in-process with no server of record.

pub mod api;
pub mod pagination;
pub mod validation;
pub mod view;

pub use api::{ApiError, BoardApi, HttpBoardApi, LocalBoardApi};
pub use pagination::Pager;
pub use view::{BoardView, EditState, Mode};
