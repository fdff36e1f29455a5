//! # lifevisor
//!
//! **Lifevisor** is a small, synchronous object lifecycle registry for Rust.
//!
//! It owns a fixed set of named components and drives them through construction,
//! initialization hooks, post-processing observers and teardown hooks, in a fixed
//! and predictable order. Everything is explicit: objects are registered by hand,
//! hooks are declared against a closed set of [`HookKind`]s, and the single
//! [`Registry`] is passed around by reference.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │ManagedObject │   │ManagedObject │   │ManagedObject │
//!     │  "A" + hooks │   │  "B" + hooks │   │  "C" + hooks │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼ register()       ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Registry                                                         │
//! │  - entries (registration order) + per-object ObjectState          │
//! │  - live stack (startup order, popped by shutdown)                 │
//! │  - ObserverSet (before_init / after_init brackets)                │
//! │  - SubscriberSet (fans out lifecycle Events)                      │
//! └──────┬──────────────────────────────────────────────────┬─────────┘
//!        ▼ start() / shutdown()                             ▼
//!   runner::run_hooks(obj, phase)                      Event stream
//!     ├─ Ok   ─► HookCompleted                     ┌────────┼────────┐
//!     └─ Err  ─► HookFailed                        ▼        ▼        ▼
//!          ├─ HookErrorPolicy::Continue ─► collect  LogWriter  custom ...
//!          └─ HookErrorPolicy::Abort    ─► stop
//! ```
//!
//! ### Lifecycle
//! ```text
//! register(obj)                         Unregistered ─► Registered
//!
//! start():  for obj in registration order
//!   ├─► Registered ─► Initializing
//!   ├─► observers.before_init(obj)
//!   ├─► AfterPropertiesSet ─► InitMethod ─► PostConstruct
//!   ├─► observers.after_init(obj)
//!   └─► Initializing ─► Ready
//!
//! shutdown():  for obj in reverse startup order
//!   ├─► Ready ─► Destroying
//!   ├─► DestroyMethod ─► Disposable ─► PreDestroy
//!   └─► Destroying ─► Destroyed
//! ```
//!
//! ## Features
//! | Area              | Description                                                  | Key types / traits                         |
//! |-------------------|--------------------------------------------------------------|--------------------------------------------|
//! | **Objects**       | Named components with ordered init/destroy hooks.            | [`ManagedObject`], [`Hook`], [`HookKind`]  |
//! | **Registry**      | Registration, ordered startup, reverse-order shutdown.       | [`Registry`], [`ObjectState`]              |
//! | **Observers**     | Post-processing brackets around each initialization.         | [`Observer`]                               |
//! | **Events**        | Lifecycle event stream for logging/metrics.                  | [`Subscribe`], [`Event`], [`EventKind`]    |
//! | **Policies**      | Abort on first hook failure, or continue and collect.        | [`HookErrorPolicy`]                        |
//! | **Errors**        | Typed errors for registration and hook failures.             | [`RegistryError`], [`HookError`], [`LifecycleError`] |
//! | **Configuration** | Centralize registry settings.                                | [`RegistryConfig`]                         |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//! - `signals`: exports [`run_until_signal`] / [`wait_for_shutdown_signal`] (tokio).
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use lifevisor::{ManagedObject, Registry, RegistryConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let log = Arc::new(Mutex::new(Vec::new()));
//!     let mut registry = Registry::new(RegistryConfig::default());
//!
//!     for name in ["A", "B", "C"] {
//!         let (init, destroy) = (log.clone(), log.clone());
//!         registry.register(
//!             ManagedObject::builder(name)
//!                 .init_method(move || {
//!                     init.lock().unwrap().push(format!("init {name}"));
//!                     Ok(())
//!                 })
//!                 .destroy_method(move || {
//!                     destroy.lock().unwrap().push(format!("destroy {name}"));
//!                     Ok(())
//!                 })
//!                 .build(),
//!         )?;
//!     }
//!
//!     registry.start()?;
//!     registry.shutdown()?;
//!
//!     assert_eq!(
//!         *log.lock().unwrap(),
//!         vec!["init A", "init B", "init C", "destroy C", "destroy B", "destroy A"]
//!     );
//!     Ok(())
//! }
//! ```
mod core;
mod error;
mod events;
mod objects;
mod observers;
mod policies;
mod subscribers;

// ---- Public re-exports ----

pub use core::{ObjectState, Registry, RegistryBuilder, RegistryConfig};
pub use error::{BoxError, HookError, LifecycleError, RegistryError};
pub use events::{Event, EventKind};
pub use objects::{Hook, HookFn, HookKind, ManagedObject, ManagedObjectBuilder, Phase};
pub use observers::Observer;
pub use policies::HookErrorPolicy;
pub use subscribers::{Subscribe, SubscriberSet};

// Optional: shutdown-on-signal helpers.
// Enable with: `--features signals`
#[cfg(feature = "signals")]
pub use core::{run_until_signal, wait_for_shutdown_signal};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
