//! # Event subscriber trait.
//!
//! Provides [`Subscribe`] an extension point for plugging custom event handlers into the registry.
//!
//! ## Rules
//! - `on_event` is called synchronously, from inside `register()`/`start()`/`shutdown()`.
//! - Events are delivered in publication order; every subscriber sees every event.
//! - Panics are caught and logged; the remaining subscribers still receive the event.
//!
//! ## Example
//! ```rust
//! use lifevisor::{Event, EventKind, Subscribe};
//!
//! struct Failures;
//!
//! impl Subscribe for Failures {
//!     fn on_event(&self, ev: &Event) {
//!         if matches!(ev.kind, EventKind::HookFailed) {
//!             // page someone, bump a counter, etc.
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str { "failures" }
//! }
//! ```

use crate::events::Event;

/// Event subscriber for registry observability.
///
/// ### Implementation requirements
/// - Keep `on_event` short; it runs inline with the lifecycle phase.
/// - Handle errors internally; do not panic.
pub trait Subscribe: Send + Sync + 'static {
    /// Processes a single event.
    fn on_event(&self, event: &Event);

    /// Returns the subscriber name used in logs.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
