//! Registry core: lifecycle orchestration.
//!
//! The public API from this module is [`Registry`] (with [`RegistryBuilder`]),
//! [`RegistryConfig`] and [`ObjectState`].
//!
//! Internal modules:
//! - [`registry`]: owns objects, drives `start()` / `shutdown()`;
//! - [`runner`]: runs one phase's hooks for one object, applies the error policy;
//! - [`state`]: per-object state machine;
//! - [`builder`]: wires config, observers and subscribers;
//! - [`shutdown`]: start, wait for an OS signal, shut down (feature `signals`).

use std::any::Any;

mod builder;
mod config;
mod registry;
mod runner;
#[cfg(feature = "signals")]
mod shutdown;
mod state;

pub use builder::RegistryBuilder;
pub use config::RegistryConfig;
pub use registry::Registry;
#[cfg(feature = "signals")]
pub use shutdown::{run_until_signal, wait_for_shutdown_signal};
pub use state::ObjectState;

/// Payload of a caught panic, kept so it can be resumed.
pub(crate) type PanicPayload = Box<dyn Any + Send + 'static>;

/// Extracts a readable message from a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
