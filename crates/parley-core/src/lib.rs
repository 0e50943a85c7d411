//! Dialogue session management for Parley.
//!
//! This crate owns the session state machine and the reply strategy seam.
//! It depends only on `parley-types` and the async runtime -- never on the
//! API layer or any serving concern.

pub mod event;
pub mod reply;
pub mod session;
