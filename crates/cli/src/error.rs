use flume::SendError;
use std::{io, time::Duration};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to install signal handler: {0}")]
    SignalHandler(#[source] io::Error),

    #[error("Failed to queue batch job: {0}")]
    Queue(#[from] SendError<String>),

    #[error("Batch did not finish within {0:?}")]
    Timeout(Duration),

    #[error("Batch cancelled")]
    Cancelled,

    #[error("Invalid configuration: {0}")]
    Config(#[from] config::Error),

    #[error("Session store unavailable: {0}")]
    Store(#[from] session::Error),

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}
