// WebSocket /ws/steps: current totals on connect, then every update

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use bytes::Bytes;
use tokio::sync::watch;
use tokio::time::{Duration, Instant, timeout};

use super::AppState;
use crate::models::StepTotals;

pub(super) const WS_PING_INTERVAL: Duration = Duration::from_secs(30);
pub(super) const WS_SEND_TIMEOUT: Duration = Duration::from_secs(10);

pub(super) async fn ws_steps(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let rx = state.session.subscribe();
    ws.on_upgrade(move |socket| async move {
        if let Err(e) = stream_steps(socket, rx).await {
            tracing::info!("Steps stream error: {}", e);
        }
    })
}

/// Sends one JSON text frame; false when the client is gone or too slow.
async fn send_totals(socket: &mut WebSocket, totals: &StepTotals) -> anyhow::Result<bool> {
    let json = serde_json::to_string(totals)?;
    let r = timeout(WS_SEND_TIMEOUT, socket.send(Message::Text(json.into()))).await;
    Ok(matches!(r, Ok(Ok(()))))
}

async fn stream_steps(
    mut socket: WebSocket,
    mut rx: watch::Receiver<Option<StepTotals>>,
) -> anyhow::Result<()> {
    tracing::info!("Client connected to steps stream");

    let current = *rx.borrow_and_update();
    if let Some(totals) = current
        && !send_totals(&mut socket, &totals).await?
    {
        return Ok(());
    }

    let mut ping_interval =
        tokio::time::interval_at(Instant::now() + WS_PING_INTERVAL, WS_PING_INTERVAL);
    ping_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let latest = *rx.borrow_and_update();
                if let Some(totals) = latest
                    && !send_totals(&mut socket, &totals).await?
                {
                    break;
                }
            }
            _ = ping_interval.tick() => {
                let r = timeout(WS_SEND_TIMEOUT, socket.send(Message::Ping(Bytes::new()))).await;
                if r.is_err() || r.unwrap_or(Ok(())).is_err() {
                    break;
                }
            }
        }
    }
    Ok(())
}
