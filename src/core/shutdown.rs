//! # Shutdown on OS signal.
//!
//! Provides [`wait_for_shutdown_signal`] an async helper that completes when the process
//! receives a termination signal, and [`run_until_signal`] which brackets it with
//! `Registry::start()` / `Registry::shutdown()`.
//!
//! ## Signals
//! **Unix platforms:**
//! - `SIGINT` (Ctrl-C in terminal)
//! - `SIGTERM` (default kill signal, used by systemd/Kubernetes)
//! - `SIGQUIT` (quit signal, often used for core dumps or hard stop)
//!
//! **Windows platforms:**
//! - `Ctrl-C` via [`tokio::signal::ctrl_c`]

use crate::core::Registry;
use crate::error::LifecycleError;

/// Waits for a termination signal.
///
/// Each call creates independent signal listeners.
///
/// Returns `Ok(())` when any signal is received, or `Err` if signal registration fails.
#[cfg(unix)]
pub async fn wait_for_shutdown_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigquit = signal(SignalKind::quit())?;

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {},
        _ = sigint.recv()  => {},
        _ = sigterm.recv() => {},
        _ = sigquit.recv() => {},
    }
    Ok(())
}

/// Waits for a termination signal.
///
/// Returns `Ok(())` when Ctrl-C is received, or `Err` if signal registration fails.
#[cfg(not(unix))]
pub async fn wait_for_shutdown_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}

/// Starts `registry`, waits for a termination signal, then shuts it down.
///
/// If `start()` fails, whatever reached `Ready` is shut down right away and the
/// start error is returned. If signal registration fails, shutdown happens
/// immediately.
pub async fn run_until_signal(registry: &mut Registry) -> Result<(), LifecycleError> {
    if let Err(err) = registry.start() {
        tracing::warn!(error = %err, "start failed; shutting down started objects");
        if let Err(teardown) = registry.shutdown() {
            tracing::warn!(error = %teardown, "shutdown after failed start reported errors");
        }
        return Err(err);
    }

    if let Err(err) = wait_for_shutdown_signal().await {
        tracing::warn!(error = %err, "signal registration failed; shutting down now");
    } else {
        tracing::info!("shutdown signal received");
    }
    registry.shutdown()
}
