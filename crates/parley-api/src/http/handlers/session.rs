//! Session lifecycle HTTP handlers.
//!
//! Endpoints:
//! - POST   /api/v1/sessions      - Mount a new panel session
//! - GET    /api/v1/sessions      - List live sessions
//! - GET    /api/v1/sessions/{id} - Snapshot of one session
//! - DELETE /api/v1/sessions/{id} - Unmount (cancels outstanding timers)

use std::time::Instant;

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use parley_types::session::DialogueSnapshot;

use crate::http::error::AppError;
use crate::http::handlers::{parse_session_id, resolve_session};
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// POST /api/v1/sessions - Mount a new panel session.
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DialogueSnapshot>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let session = state.create_session()?;
    let snapshot = session.snapshot().await;

    let elapsed = start.elapsed().as_millis() as u64;
    let resp = ApiResponse::success(snapshot, request_id, elapsed)
        .with_link("self", &format!("/api/v1/sessions/{}", session.id()))
        .with_link("events", &format!("/ws/sessions/{}/events", session.id()));

    Ok(Json(resp))
}

/// GET /api/v1/sessions - List snapshots of all live sessions.
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<DialogueSnapshot>>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let sessions: Vec<_> = state
        .sessions
        .iter()
        .map(|entry| entry.value().clone())
        .collect();

    let mut snapshots = Vec::with_capacity(sessions.len());
    for session in sessions {
        snapshots.push(session.snapshot().await);
    }
    // Session ids are UUID v7, so this is creation order.
    snapshots.sort_by_key(|s| s.id.0);

    let elapsed = start.elapsed().as_millis() as u64;
    let resp = ApiResponse::success(snapshots, request_id, elapsed)
        .with_link("self", "/api/v1/sessions");

    Ok(Json(resp))
}

/// GET /api/v1/sessions/{id} - Snapshot of one session.
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<DialogueSnapshot>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let session = resolve_session(&state, &session_id)?;
    let snapshot = session.snapshot().await;

    let elapsed = start.elapsed().as_millis() as u64;
    let resp = ApiResponse::success(snapshot, request_id, elapsed)
        .with_link("self", &format!("/api/v1/sessions/{session_id}"))
        .with_link("events", &format!("/ws/sessions/{session_id}/events"));

    Ok(Json(resp))
}

/// DELETE /api/v1/sessions/{id} - Unmount a session.
///
/// Shuts the session down (outstanding welcome/reply timers are canceled)
/// and forgets it. The transcript is gone; nothing is persisted.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let id = parse_session_id(&session_id)?;
    if !state.remove_session(&id) {
        return Err(AppError::SessionNotFound);
    }

    let elapsed = start.elapsed().as_millis() as u64;
    let resp = ApiResponse::success(
        serde_json::json!({"deleted": true, "session_id": session_id}),
        request_id,
        elapsed,
    );

    Ok(Json(resp))
}
