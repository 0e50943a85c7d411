//! HTTP handler modules.

pub mod message;
pub mod panel;
pub mod session;
pub mod ws;

use std::sync::Arc;

use parley_types::session::SessionId;

use crate::http::error::AppError;
use crate::state::{AppState, ConcreteSession};

/// Parse a session id from a path parameter, returning a 400 on bad format.
pub(crate) fn parse_session_id(s: &str) -> Result<SessionId, AppError> {
    s.parse::<SessionId>()
        .map_err(|_| AppError::Validation(format!("Invalid session id: {s}")))
}

/// Resolve a live session from a path parameter.
pub(crate) fn resolve_session(
    state: &AppState,
    id_param: &str,
) -> Result<Arc<ConcreteSession>, AppError> {
    let id = parse_session_id(id_param)?;
    state.get_session(&id).ok_or(AppError::SessionNotFound)
}
