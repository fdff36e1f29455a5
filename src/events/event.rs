//! # Lifecycle events emitted by the registry.
//!
//! The [`EventKind`] enum classifies event types across three categories:
//! - **Registration events**: an object entered the registry
//! - **Transition events**: an object changed [`ObjectState`](crate::ObjectState)
//! - **Hook events**: a single hook completed or failed
//!
//! The [`Event`] struct carries additional metadata such as timestamps, object name,
//! hook kind and failure reason.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases monotonically.
//! Since the registry is synchronous, subscribers receive events in `seq` order.
//!
//! ## Example
//! ```rust
//! use lifevisor::{Event, EventKind, HookKind};
//!
//! let ev = Event::new(EventKind::HookFailed)
//!     .with_object("db")
//!     .with_hook(HookKind::InitMethod)
//!     .with_reason("boom");
//!
//! assert_eq!(ev.kind, EventKind::HookFailed);
//! assert_eq!(ev.object.as_deref(), Some("db"));
//! assert_eq!(ev.reason.as_deref(), Some("boom"));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

use crate::objects::{HookKind, Phase};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Registration ===
    /// Object was accepted by `register()` (constructor-equivalent already ran).
    ///
    /// Sets:
    /// - `object`: object name
    ObjectRegistered,

    // === Init phase ===
    /// Object entered `Initializing`; observers' `before_init` runs next.
    ///
    /// Sets:
    /// - `object`, `phase = Init`
    ObjectInitializing,

    /// Object reached `Ready`; observers' `after_init` already ran.
    ///
    /// Sets:
    /// - `object`, `phase = Init`
    ObjectReady,

    /// Object init was aborted (only under `HookErrorPolicy::Abort`).
    ///
    /// Sets:
    /// - `object`, `phase = Init`, `hook`, `reason`
    ObjectFailed,

    // === Destroy phase ===
    /// Object entered `Destroying`.
    ///
    /// Sets:
    /// - `object`, `phase = Destroy`
    ObjectDestroying,

    /// Object reached the terminal `Destroyed` state.
    ///
    /// Sets:
    /// - `object`, `phase = Destroy`
    ObjectDestroyed,

    // === Hooks ===
    /// Hook returned `Ok`.
    ///
    /// Sets:
    /// - `object`, `phase`, `hook`, `label` (if any)
    HookCompleted,

    /// Hook returned an error or panicked.
    ///
    /// Sets:
    /// - `object`, `phase`, `hook`, `label` (if any), `reason`
    HookFailed,

    // === Observers ===
    /// Observer panicked inside `before_init`/`after_init`.
    ///
    /// Sets:
    /// - `object`: object being initialized
    /// - `label`: observer name
    /// - `reason`: panic message
    ObserverPanicked,
}

/// Lifecycle event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,
    /// Name of the object, if applicable.
    pub object: Option<Arc<str>>,
    /// Lifecycle phase, if applicable.
    pub phase: Option<Phase>,
    /// Hook kind, for hook events.
    pub hook: Option<HookKind>,
    /// Hook label or observer name.
    pub label: Option<Arc<str>>,
    /// Human-readable reason (errors, panic messages).
    pub reason: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            object: None,
            phase: None,
            hook: None,
            label: None,
            reason: None,
        }
    }

    /// Attaches an object name.
    #[inline]
    pub fn with_object(mut self, object: impl Into<Arc<str>>) -> Self {
        self.object = Some(object.into());
        self
    }

    /// Attaches a phase.
    #[inline]
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = Some(phase);
        self
    }

    /// Attaches a hook kind (and its phase).
    #[inline]
    pub fn with_hook(mut self, hook: HookKind) -> Self {
        self.phase = Some(hook.phase());
        self.hook = Some(hook);
        self
    }

    /// Attaches a hook label or observer name.
    #[inline]
    pub fn with_label(mut self, label: impl Into<Arc<str>>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Creates an observer panic event.
    #[inline]
    pub fn observer_panicked(observer: &'static str, object: &str, info: String) -> Self {
        Event::new(EventKind::ObserverPanicked)
            .with_object(object)
            .with_phase(Phase::Init)
            .with_label(observer)
            .with_reason(info)
    }

    #[inline]
    pub fn is_hook_event(&self) -> bool {
        matches!(self.kind, EventKind::HookCompleted | EventKind::HookFailed)
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(
            self.kind,
            EventKind::HookFailed | EventKind::ObjectFailed | EventKind::ObserverPanicked
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_is_monotonic() {
        let a = Event::new(EventKind::ObjectRegistered);
        let b = Event::new(EventKind::ObjectReady);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn test_with_hook_sets_phase() {
        let ev = Event::new(EventKind::HookCompleted).with_hook(HookKind::PreDestroy);
        assert_eq!(ev.phase, Some(Phase::Destroy));
        assert!(ev.is_hook_event());
        assert!(!ev.is_failure());
    }

    #[test]
    fn test_observer_panicked_fields() {
        let ev = Event::observer_panicked("audit", "db", "boom".to_string());
        assert_eq!(ev.kind, EventKind::ObserverPanicked);
        assert_eq!(ev.label.as_deref(), Some("audit"));
        assert_eq!(ev.object.as_deref(), Some("db"));
        assert!(ev.is_failure());
    }
}
