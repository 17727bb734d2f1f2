// Connection session: owns the source's connect/disconnect lifecycle.
// Each successful connect performs exactly one daily-steps read; the totals are
// published on a watch channel for whatever presents them.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{Duration, timeout};
use tracing::Instrument;

use crate::aggregation::aggregate;
use crate::config::SessionConfig;
use crate::errors::{Error, Result};
use crate::models::{DataReadRequest, StepTotals, TimeRange};
use crate::source::FitnessSource;

const COMMAND_CHANNEL_CAPACITY: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Connect,
    Disconnect,
}

/// Cheap-to-clone handle for sending commands and reading the latest totals.
#[derive(Clone)]
pub struct SessionHandle {
    commands: mpsc::Sender<SessionCommand>,
    totals: watch::Receiver<Option<StepTotals>>,
}

impl SessionHandle {
    pub async fn send(&self, command: SessionCommand) -> Result<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| Error::ChannelClosed)
    }

    pub async fn connect(&self) -> Result<()> {
        self.send(SessionCommand::Connect).await
    }

    pub async fn disconnect(&self) -> Result<()> {
        self.send(SessionCommand::Disconnect).await
    }

    /// Latest totals, `None` until a read has succeeded.
    pub fn totals(&self) -> Option<StepTotals> {
        *self.totals.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<StepTotals>> {
        self.totals.clone()
    }
}

/// Spawns the session task. With `connect_on_start` a `Connect` is queued immediately.
/// The task exits on shutdown or once every handle is dropped, disconnecting the source.
pub fn spawn<S: FitnessSource>(
    source: Arc<S>,
    config: SessionConfig,
    mut shutdown_rx: oneshot::Receiver<()>,
) -> (SessionHandle, tokio::task::JoinHandle<()>) {
    let (commands, mut command_rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
    let (totals_tx, totals) = watch::channel(None);

    if config.connect_on_start {
        let _ = commands.try_send(SessionCommand::Connect);
    }

    let session_span = tracing::span!(
        tracing::Level::DEBUG,
        "session",
        read_timeout_secs = config.read_timeout_secs
    );
    let join = tokio::spawn(
        async move {
            loop {
                tokio::select! {
                    command = command_rx.recv() => match command {
                        Some(SessionCommand::Connect) => {
                            // A slow connect or read must not hold up shutdown.
                            tokio::select! {
                                _ = on_connect(source.as_ref(), &config, &totals_tx) => {}
                                _ = &mut shutdown_rx => {
                                    tracing::debug!("Session shutting down during connect");
                                    break;
                                }
                            }
                        }
                        Some(SessionCommand::Disconnect) => {
                            on_disconnect(source.as_ref()).await;
                        }
                        None => break,
                    },
                    _ = &mut shutdown_rx => {
                        tracing::debug!("Session shutting down");
                        break;
                    }
                }
            }
            on_disconnect(source.as_ref()).await;
        }
        .instrument(session_span),
    );

    (SessionHandle { commands, totals }, join)
}

async fn on_connect<S: FitnessSource>(
    source: &S,
    config: &SessionConfig,
    totals_tx: &watch::Sender<Option<StepTotals>>,
) {
    if source.is_connected().await {
        tracing::debug!("Already connected; connect ignored");
        return;
    }
    if let Err(e) = source.connect().await {
        tracing::warn!(error = %e, "Failed to connect to the fitness source");
        return;
    }
    tracing::info!("Connected to the fitness source");

    match read_steps(source, config.read_timeout_secs).await {
        Ok(Some(totals)) => {
            tracing::info!(
                last_24_hours = totals.last_24_hours,
                last_48_hours = totals.last_48_hours,
                "step totals updated"
            );
            totals_tx.send_replace(Some(totals));
        }
        // aggregate() has already logged the bucket count
        Ok(None) => {}
        Err(e) => {
            tracing::warn!(error = %e, operation = "read_steps", "step read failed");
        }
    }
}

async fn on_disconnect<S: FitnessSource>(source: &S) {
    if source.is_connected().await {
        source.disconnect().await;
        tracing::info!("Disconnected from the fitness source");
    }
}

/// One aggregate read over the last two days in 1-day buckets.
/// `Ok(None)` when the source returned fewer than two buckets.
pub async fn read_steps<S: FitnessSource>(
    source: &S,
    read_timeout_secs: u64,
) -> Result<Option<StepTotals>> {
    let request = DataReadRequest::daily_steps(TimeRange::last_two_days())?;
    let result = timeout(
        Duration::from_secs(read_timeout_secs),
        source.read_data(&request),
    )
    .await
    .map_err(|_| Error::Timeout(read_timeout_secs))??;
    Ok(aggregate(&result.buckets))
}
