//! Data models and path conventions for the Open Credit Cards dataset.
//!
//! This crate defines the records, summaries, and filters shared by the query
//! engine and the MCP surface, along with the snapshot compiled into the binary.

pub mod embedded;
pub mod models;
pub mod schema;

pub use models::*;
