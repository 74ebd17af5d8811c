use crate::error::Error;
use tokio::signal::unix::{SignalKind, signal};

/// Resolves once the process is asked to stop (SIGINT or SIGTERM).
pub async fn wait_for_shutdown() -> Result<(), Error> {
    let mut sigint = signal(SignalKind::interrupt()).map_err(Error::SignalHandler)?;
    let mut sigterm = signal(SignalKind::terminate()).map_err(Error::SignalHandler)?;

    tokio::select! {
        _ = sigint.recv() => {
            tracing::info!("received SIGINT");
        }
        _ = sigterm.recv() => {
            tracing::info!("received SIGTERM");
        }
    }
    Ok(())
}
