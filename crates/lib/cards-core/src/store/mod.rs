//! Record store and data source helpers.
//!
//! The store is built once from `(path, content)` pairs and never mutated.

pub mod memory;
pub mod source;

pub use memory::{RecordStore, StoreError, StoreResult};
