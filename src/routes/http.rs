// HTTP handlers: version, current totals, session commands

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::AppState;
use crate::session::SessionCommand;
use crate::version::{NAME, VERSION};

/// GET /version — service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/steps — latest totals, 404 until the first successful read.
pub(super) async fn steps_handler(State(state): State<AppState>) -> Response {
    match state.session.totals() {
        Some(totals) => Json(totals).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "no step totals yet" })),
        )
            .into_response(),
    }
}

pub(super) async fn connect_handler(State(state): State<AppState>) -> Response {
    queue(&state, SessionCommand::Connect).await
}

pub(super) async fn disconnect_handler(State(state): State<AppState>) -> Response {
    queue(&state, SessionCommand::Disconnect).await
}

/// 202 once the command is queued; the session does the work asynchronously.
async fn queue(state: &AppState, command: SessionCommand) -> Response {
    match state.session.send(command).await {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(e) => {
            tracing::warn!(error = %e, ?command, "session command rejected");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
