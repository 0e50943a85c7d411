//! Message submission HTTP handlers.
//!
//! Endpoints:
//! - POST /api/v1/sessions/{id}/messages    - Submit user text
//! - POST /api/v1/sessions/{id}/actions     - Select a suggested action
//! - GET  /api/v1/sessions/{id}/suggestions - The suggested-action menu
//!
//! Blank submissions are a silent no-op end to end: the response is a 200
//! with the unchanged snapshot, matching the session manager's contract.

use std::time::Instant;

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;
use uuid::Uuid;

use parley_types::session::DialogueSnapshot;

use crate::http::error::AppError;
use crate::http::handlers::resolve_session;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Body for message submission.
#[derive(Debug, Deserialize)]
pub struct SubmitBody {
    pub text: String,
}

/// Body for suggested-action selection.
#[derive(Debug, Deserialize)]
pub struct ActionBody {
    pub action: String,
}

/// POST /api/v1/sessions/{id}/messages - Submit user text.
pub async fn submit(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(body): Json<SubmitBody>,
) -> Result<Json<ApiResponse<DialogueSnapshot>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let session = resolve_session(&state, &session_id)?;
    session.submit(&body.text).await;
    let snapshot = session.snapshot().await;

    let elapsed = start.elapsed().as_millis() as u64;
    let resp = ApiResponse::success(snapshot, request_id, elapsed)
        .with_link("self", &format!("/api/v1/sessions/{session_id}"));

    Ok(Json(resp))
}

/// POST /api/v1/sessions/{id}/actions - Select a suggested action.
pub async fn select_action(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(body): Json<ActionBody>,
) -> Result<Json<ApiResponse<DialogueSnapshot>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let session = resolve_session(&state, &session_id)?;
    session.select_suggested_action(&body.action).await;
    let snapshot = session.snapshot().await;

    let elapsed = start.elapsed().as_millis() as u64;
    let resp = ApiResponse::success(snapshot, request_id, elapsed)
        .with_link("self", &format!("/api/v1/sessions/{session_id}"));

    Ok(Json(resp))
}

/// GET /api/v1/sessions/{id}/suggestions - The suggested-action menu.
///
/// Empty unless the transcript holds only the welcome message.
pub async fn suggestions(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<String>>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let session = resolve_session(&state, &session_id)?;
    let menu = session.suggestions().await;

    let elapsed = start.elapsed().as_millis() as u64;
    let resp = ApiResponse::success(menu, request_id, elapsed)
        .with_link("session", &format!("/api/v1/sessions/{session_id}"));

    Ok(Json(resp))
}
