//! Lifecycle events.
//!
//! This module groups the event **data model** published by the registry while it
//! registers, initializes and destroys objects.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//!
//! ## Quick reference
//! - **Publisher**: `Registry` (register / start / shutdown), through its `SubscriberSet`.
//! - **Consumers**: any [`Subscribe`](crate::Subscribe) implementation, e.g. `LogWriter`.

mod event;

pub use event::{Event, EventKind};
