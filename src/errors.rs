// Library error type. The binary and config loader stay on anyhow.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid read request: {0}")]
    InvalidRequest(String),

    #[error("Fitness source is not connected")]
    NotConnected,

    #[error("Read timed out after {0}s")]
    Timeout(u64),

    #[error("Session channel closed")]
    ChannelClosed,
}

pub type Result<T> = std::result::Result<T, Error>;
