// HTTP + WebSocket routes: the presentation side of the step totals

mod http;
mod ws;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::session::SessionHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) session: SessionHandle,
}

pub fn app(session: SessionHandle) -> Router {
    let state = AppState { session };
    Router::new()
        .route("/", get(|| async { "stepcount: last 24h / 48h steps" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/steps", get(http::steps_handler)) // GET /api/steps
        .route("/api/connect", post(http::connect_handler)) // POST /api/connect
        .route("/api/disconnect", post(http::disconnect_handler)) // POST /api/disconnect
        .route("/ws/steps", get(ws::ws_steps)) // WS /ws/steps
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
