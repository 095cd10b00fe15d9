//! MCP tool modules.
//!
//! Tools are grouped by what they return: card summaries and records, and the
//! raw dataset files with their schema.

pub mod cards;
mod data;
