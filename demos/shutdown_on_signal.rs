//! # Example: shutdown_on_signal
//!
//! Starts a registry, then blocks until Ctrl-C / SIGTERM and shuts it down.
//!
//! ## Run
//! ```bash
//! cargo run --example shutdown_on_signal --features signals
//! # press Ctrl-C
//! ```

use lifevisor::{ManagedObject, Registry, RegistryConfig, run_until_signal};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut registry = Registry::new(RegistryConfig::default());
    registry.register(
        ManagedObject::builder("listener")
            .init_method(|| {
                println!("listener: bound, waiting for a signal");
                Ok(())
            })
            .pre_destroy(|| {
                println!("listener: closed");
                Ok(())
            })
            .build(),
    )?;

    run_until_signal(&mut registry).await?;
    Ok(())
}
