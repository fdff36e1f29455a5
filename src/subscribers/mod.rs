//! # Event subscribers for the lifevisor registry.
//!
//! This module provides the [`Subscribe`] trait, the [`SubscriberSet`] fan-out and
//! a built-in [`LogWriter`] for events published by the [`Registry`](crate::Registry).
//!
//! ## Architecture
//! ```text
//! Registry::register/start/shutdown ── Event ──► SubscriberSet::emit(&Event)
//!                                                   │
//!                                         ┌─────────┼─────────┐
//!                                         ▼         ▼         ▼
//!                                     LogWriter  Metrics   Custom ...
//! ```
//!
//! Subscribers only observe. To act around object initialization use an
//! [`Observer`](crate::Observer) instead.

#[cfg(feature = "logging")]
mod log;
mod set;
mod subscriber;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use set::SubscriberSet;
pub use subscriber::Subscribe;
