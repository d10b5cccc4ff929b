//! Middleware modules.

mod cors;
pub mod error;

pub use cors::Cors;
