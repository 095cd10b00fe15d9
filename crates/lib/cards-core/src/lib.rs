//! Core services for the Open Credit Cards server.
//!
//! This crate owns the in-memory record store, the summary projection and
//! search logic exposed through the control plane, and the tool dispatcher that
//! turns named operations into uniform result envelopes.

pub mod control;
pub mod dispatch;
pub mod store;
