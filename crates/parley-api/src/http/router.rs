//! Axum router configuration with middleware.
//!
//! All REST routes are under `/api/v1/`; the event stream lives at
//! `/ws/sessions/{id}/events`. Middleware: CORS, tracing.
//!
//! In production, the built dashboard SPA is served from `web/dist/`
//! (configurable via `PARLEY_WEB_DIR`). API routes take priority; unknown
//! paths fall through to the SPA's `index.html` for client-side routing.
//! If the directory does not exist, only the API is served.

use axum::Router;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Session lifecycle
        .route("/sessions", post(handlers::session::create_session))
        .route("/sessions", get(handlers::session::list_sessions))
        .route("/sessions/{id}", get(handlers::session::get_session))
        .route("/sessions/{id}", delete(handlers::session::delete_session))
        // Panel visibility
        .route("/sessions/{id}/open", post(handlers::panel::open))
        .route("/sessions/{id}/close", post(handlers::panel::close))
        .route("/sessions/{id}/minimize", post(handlers::panel::minimize))
        .route("/sessions/{id}/restore", post(handlers::panel::restore))
        // Messages
        .route("/sessions/{id}/messages", post(handlers::message::submit))
        .route("/sessions/{id}/actions", post(handlers::message::select_action))
        .route(
            "/sessions/{id}/suggestions",
            get(handlers::message::suggestions),
        );

    let mut router = Router::new()
        .nest("/api/v1", api_routes)
        .route("/ws/sessions/{id}/events", get(handlers::ws::ws_handler))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Serve the built dashboard SPA from disk if the directory exists.
    // API routes and /health take priority; unknown paths fall through
    // to index.html for client-side routing.
    let web_dir = std::env::var("PARLEY_WEB_DIR").unwrap_or_else(|_| "web/dist".to_string());
    if std::path::Path::new(&web_dir).exists() {
        let index_path = format!("{}/index.html", web_dir);
        let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(index_path));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir, "SPA static file serving enabled");
    }

    router
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_types::script::DialogueScript;

    #[tokio::test]
    async fn test_router_builds() {
        let state = AppState::new(DialogueScript::default()).unwrap();
        let _router = build_router(state);
    }
}
