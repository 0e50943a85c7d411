//! Panel visibility HTTP handlers.
//!
//! Endpoints (all return the post-transition snapshot):
//! - POST /api/v1/sessions/{id}/open
//! - POST /api/v1/sessions/{id}/close
//! - POST /api/v1/sessions/{id}/minimize
//! - POST /api/v1/sessions/{id}/restore
//!
//! Each operation is a no-op when its precondition does not hold (opening an
//! open panel, minimizing a closed one), mirroring the session manager.

use std::time::Instant;

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use parley_types::session::DialogueSnapshot;

use crate::http::error::AppError;
use crate::http::handlers::resolve_session;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Which visibility operation a handler applies.
enum PanelOp {
    Open,
    Close,
    Minimize,
    Restore,
}

async fn apply(
    state: AppState,
    session_id: String,
    op: PanelOp,
) -> Result<Json<ApiResponse<DialogueSnapshot>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let session = resolve_session(&state, &session_id)?;
    match op {
        PanelOp::Open => session.open().await,
        PanelOp::Close => session.close().await,
        PanelOp::Minimize => session.minimize().await,
        PanelOp::Restore => session.restore().await,
    }
    let snapshot = session.snapshot().await;

    let elapsed = start.elapsed().as_millis() as u64;
    let resp = ApiResponse::success(snapshot, request_id, elapsed)
        .with_link("self", &format!("/api/v1/sessions/{session_id}"));

    Ok(Json(resp))
}

/// POST /api/v1/sessions/{id}/open
pub async fn open(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<DialogueSnapshot>>, AppError> {
    apply(state, session_id, PanelOp::Open).await
}

/// POST /api/v1/sessions/{id}/close
pub async fn close(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<DialogueSnapshot>>, AppError> {
    apply(state, session_id, PanelOp::Close).await
}

/// POST /api/v1/sessions/{id}/minimize
pub async fn minimize(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<DialogueSnapshot>>, AppError> {
    apply(state, session_id, PanelOp::Minimize).await
}

/// POST /api/v1/sessions/{id}/restore
pub async fn restore(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<DialogueSnapshot>>, AppError> {
    apply(state, session_id, PanelOp::Restore).await
}
