//! Shared domain types for Parley.
//!
//! This crate contains the core domain types used across the Parley service:
//! messages, session state, dialogue scripts, events, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod error;
pub mod event;
pub mod message;
pub mod script;
pub mod session;
