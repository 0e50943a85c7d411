//! WebSocket handler for real-time dialogue event streaming.
//!
//! The `/ws/sessions/{id}/events` endpoint upgrades an HTTP connection to a
//! WebSocket. Once connected, the handler:
//!
//! - **Forwards events:** Subscribes to the session's event bus and pushes
//!   every `DialogueEvent` to the client as a JSON text frame.
//! - **Receives commands:** Parses incoming text frames as [`WsCommand`].
//!   Only a keep-alive `ping` exists; session mutations go through REST.
//!
//! Lagged receivers (when the client is too slow to keep up) are handled
//! gracefully: the handler logs a warning and continues receiving.
//!
//! Disconnecting a WebSocket does **not** touch the session. Timers keep
//! running and the transcript keeps growing; a client can reconnect and
//! fetch a snapshot to catch up.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast;

use crate::http::error::AppError;
use crate::http::handlers::resolve_session;
use crate::state::AppState;

/// Incoming command from a WebSocket client.
///
/// Clients send JSON-encoded text frames matching one of these variants.
/// Unknown or malformed messages are logged and ignored.
#[derive(Debug, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WsCommand {
    /// Keep-alive ping. Server responds with `{"type":"pong"}`.
    Ping,
}

/// Upgrade an HTTP request to a WebSocket connection for session events.
///
/// This is mounted at `/ws/sessions/{id}/events` in the router. An unknown
/// session id is rejected before the upgrade.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let session = resolve_session(&state, &session_id)?;
    let event_rx = session.subscribe();
    Ok(ws.on_upgrade(move |socket| handle_ws_connection(socket, event_rx)))
}

/// Core WebSocket connection handler.
///
/// Uses `tokio::select!` to multiplex between receiving events from the
/// session's bus and incoming WebSocket messages from the client, keeping
/// both directions in a single task.
async fn handle_ws_connection(
    socket: WebSocket,
    mut event_rx: broadcast::Receiver<parley_types::event::DialogueEvent>,
) {
    let (mut ws_sender, mut ws_receiver) = socket.split();

    loop {
        tokio::select! {
            // --- Branch 1: Forward session events to the WebSocket client ---
            event_result = event_rx.recv() => {
                match event_result {
                    Ok(event) => {
                        match serde_json::to_string(&event) {
                            Ok(json) => {
                                if ws_sender.send(Message::Text(json.into())).await.is_err() {
                                    // Client disconnected
                                    break;
                                }
                            }
                            Err(err) => {
                                tracing::warn!("Failed to serialize DialogueEvent: {err}");
                            }
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(
                            skipped = n,
                            "WebSocket subscriber lagged, skipping {n} events"
                        );
                        // Continue receiving -- the client will miss some
                        // events but can resync from a snapshot.
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        // Session was unmounted (event bus dropped)
                        break;
                    }
                }
            }

            // --- Branch 2: Process commands from the WebSocket client ---
            msg_result = ws_receiver.next() => {
                match msg_result {
                    Some(Ok(Message::Text(text))) => {
                        process_command(&text, &mut ws_sender).await;
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        // Client disconnected
                        break;
                    }
                    Some(Err(err)) => {
                        tracing::debug!("WebSocket receive error: {err}");
                        break;
                    }
                    // Ignore binary, ping, pong protocol frames (handled by axum/tungstenite)
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    tracing::debug!("WebSocket connection closed");
}

/// Parse and process a single command from the WebSocket client.
async fn process_command(
    text: &str,
    ws_sender: &mut (impl SinkExt<Message, Error = axum::Error> + Unpin),
) {
    let cmd: WsCommand = match serde_json::from_str(text) {
        Ok(cmd) => cmd,
        Err(err) => {
            tracing::warn!(
                raw = %text,
                error = %err,
                "Ignoring malformed WebSocket command"
            );
            return;
        }
    };

    match cmd {
        WsCommand::Ping => {
            let pong = r#"{"type":"pong"}"#;
            if ws_sender.send(Message::Text(pong.into())).await.is_err() {
                tracing::debug!("Failed to send pong (client disconnecting)");
            }
        }
    }
}
