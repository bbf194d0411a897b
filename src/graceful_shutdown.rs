use tokio::signal;
use tracing::warn;

/// Resolves once the process receives Ctrl+C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigterm = signal(SignalKind::terminate()).expect("Failed to listen for SIGTERM");

        tokio::select! {
            _ = signal::ctrl_c() => warn!("Ctrl+C received, shutting down"),
            _ = sigterm.recv() => warn!("SIGTERM received, shutting down"),
        }
    }

    #[cfg(not(unix))]
    {
        if signal::ctrl_c().await.is_ok() {
            warn!("Ctrl+C received, shutting down");
        }
    }
}
