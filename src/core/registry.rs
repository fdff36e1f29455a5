//! # Object registry - explicit lifecycle manager.
//!
//! Registry owns every [`ManagedObject`] and drives their lifecycle:
//! - `register(obj)` → append in declaration order (`Registered`)
//! - `start()` → initialize every `Registered` object in registration order
//! - `shutdown()` → tear down every `Ready` object in reverse startup order
//!
//! ## Architecture
//! ```text
//! start():
//!   for obj in registration order (state == Registered):
//!     ├─► Registered ─► Initializing          publish ObjectInitializing
//!     ├─► observers.before_init(obj)
//!     ├─► runner::run_hooks(obj, Init)        AfterPropertiesSet ─► InitMethod ─► PostConstruct
//!     │     └─ Abort + failure ─► Failed      publish ObjectFailed, return Aborted
//!     ├─► observers.after_init(obj)
//!     └─► Initializing ─► Ready               publish ObjectReady, push onto live stack
//!
//! shutdown():
//!   while let Some(obj) = live.pop():         (reverse startup order)
//!     ├─► Ready ─► Destroying                 publish ObjectDestroying
//!     ├─► runner::run_hooks(obj, Destroy)     DestroyMethod ─► Disposable ─► PreDestroy
//!     └─► Destroying ─► Destroyed             publish ObjectDestroyed
//! ```
//!
//! ## Rules
//! - Registry owns the objects; callers hold `&mut Registry`, never a global.
//! - `start()` and `shutdown()` are idempotent: objects already past the phase are skipped.
//! - Objects that never reached `Ready` are never torn down.
//! - Dropping the registry does not run destroy hooks.
//! - With `catch_panics` off, a panic still settles the object (`Failed` during
//!   init, `Destroyed` during teardown) before it unwinds out of the call.

use std::collections::HashMap;
use std::panic::resume_unwind;

use crate::core::runner::{self, Interrupt};
use crate::core::{ObjectState, PanicPayload, RegistryConfig};
use crate::error::{HookError, LifecycleError, RegistryError};
use crate::events::{Event, EventKind};
use crate::objects::{ManagedObject, Phase};
use crate::observers::{Bracket, ObserverSet};
use crate::subscribers::SubscriberSet;

use super::builder::RegistryBuilder;

/// A registered object and its current state.
struct Entry {
    object: ManagedObject,
    state: ObjectState,
}

/// Explicitly constructed lifecycle registry.
pub struct Registry {
    cfg: RegistryConfig,
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
    /// Indices of `Ready` objects, in startup order.
    live: Vec<usize>,
    /// Every index that reached `Ready`, in order; backs `startup_order()`.
    started: Vec<usize>,
    /// Every index that reached `Destroyed`, in order; backs `teardown_order()`.
    destroyed: Vec<usize>,
    observers: ObserverSet,
    subscribers: SubscriberSet,
}

impl Registry {
    /// Creates a registry without observers or subscribers.
    pub fn new(cfg: RegistryConfig) -> Self {
        Self::builder(cfg).build()
    }

    /// Returns a builder to attach observers and subscribers.
    pub fn builder(cfg: RegistryConfig) -> RegistryBuilder {
        RegistryBuilder::new(cfg)
    }

    pub(crate) fn from_parts(
        cfg: RegistryConfig,
        observers: ObserverSet,
        subscribers: SubscriberSet,
    ) -> Self {
        tracing::debug!(
            observers = observers.len(),
            subscribers = subscribers.len(),
            "registry built"
        );
        Self {
            cfg,
            entries: Vec::new(),
            index: HashMap::new(),
            live: Vec::new(),
            started: Vec::new(),
            destroyed: Vec::new(),
            observers,
            subscribers,
        }
    }

    /// Adds an object at the end of the managed sequence.
    ///
    /// # Errors
    /// [`RegistryError::DuplicateName`] if the name is taken; the registry is unchanged
    /// and `object` is dropped.
    pub fn register(&mut self, object: ManagedObject) -> Result<(), RegistryError> {
        if self.index.contains_key(object.name()) {
            return Err(RegistryError::DuplicateName {
                name: object.name().to_string(),
            });
        }

        let idx = self.entries.len();
        let name = object.name().to_string();
        tracing::debug!(object = %name, position = idx, "object registered");

        self.index.insert(name.clone(), idx);
        self.entries.push(Entry {
            object,
            state: ObjectState::Registered,
        });
        self.subscribers
            .emit(&Event::new(EventKind::ObjectRegistered).with_object(name));
        Ok(())
    }

    /// Initializes every `Registered` object in registration order.
    ///
    /// Objects that are already `Ready`, `Destroyed` or `Failed` are skipped, so a
    /// second call only picks up objects registered since the first one.
    ///
    /// # Errors
    /// - `Continue` policy: [`LifecycleError::HooksFailed`] after every object was
    ///   initialized, if any hook failed.
    /// - `Abort` policy: [`LifecycleError::Aborted`] at the first failing hook.
    pub fn start(&mut self) -> Result<(), LifecycleError> {
        let mut failures = Vec::new();

        for idx in 0..self.entries.len() {
            if self.entries[idx].state != ObjectState::Registered {
                continue;
            }
            self.init_one(idx, &mut failures)?;
        }

        finish(Phase::Init, failures)
    }

    /// Tears down every `Ready` object in reverse startup order.
    ///
    /// Calling it again is a no-op for objects already `Destroyed`.
    ///
    /// # Errors
    /// - `Continue` policy: [`LifecycleError::HooksFailed`] after every object was
    ///   destroyed, if any hook failed.
    /// - `Abort` policy: [`LifecycleError::Aborted`] at the first failing hook. The
    ///   failing object is still `Destroyed`; earlier objects stay `Ready`.
    pub fn shutdown(&mut self) -> Result<(), LifecycleError> {
        let mut failures = Vec::new();

        while let Some(idx) = self.live.pop() {
            self.destroy_one(idx, &mut failures)?;
        }

        finish(Phase::Destroy, failures)
    }

    fn init_one(
        &mut self,
        idx: usize,
        failures: &mut Vec<HookError>,
    ) -> Result<(), LifecycleError> {
        self.transition(idx, ObjectState::Initializing);
        self.publish(idx, EventKind::ObjectInitializing, Phase::Init);

        self.bracket(idx, Bracket::Before);

        let entry = &mut self.entries[idx];
        let outcome = runner::run_hooks(
            &mut entry.object,
            Phase::Init,
            &self.cfg,
            &self.subscribers,
            failures,
        );

        match outcome {
            Ok(()) => {}
            Err(Interrupt::Aborted(error)) => {
                self.mark_failed(idx, &error);
                return Err(LifecycleError::Aborted {
                    phase: Phase::Init,
                    error,
                });
            }
            Err(Interrupt::Panicked { error, payload }) => {
                self.mark_failed(idx, &error);
                resume_unwind(payload);
            }
        }

        self.bracket(idx, Bracket::After);

        self.transition(idx, ObjectState::Ready);
        self.live.push(idx);
        self.started.push(idx);
        self.publish(idx, EventKind::ObjectReady, Phase::Init);
        Ok(())
    }

    fn destroy_one(
        &mut self,
        idx: usize,
        failures: &mut Vec<HookError>,
    ) -> Result<(), LifecycleError> {
        self.transition(idx, ObjectState::Destroying);
        self.publish(idx, EventKind::ObjectDestroying, Phase::Destroy);

        let entry = &mut self.entries[idx];
        let outcome = runner::run_hooks(
            &mut entry.object,
            Phase::Destroy,
            &self.cfg,
            &self.subscribers,
            failures,
        );

        self.transition(idx, ObjectState::Destroyed);
        self.destroyed.push(idx);
        self.publish(idx, EventKind::ObjectDestroyed, Phase::Destroy);

        match outcome {
            Ok(()) => Ok(()),
            Err(Interrupt::Aborted(error)) => Err(LifecycleError::Aborted {
                phase: Phase::Destroy,
                error,
            }),
            Err(Interrupt::Panicked { payload, .. }) => resume_unwind(payload),
        }
    }

    /// Moves an initializing object to `Failed` and publishes `ObjectFailed`.
    fn mark_failed(&mut self, idx: usize, error: &HookError) {
        self.transition(idx, ObjectState::Failed);
        self.subscribers.emit(
            &Event::new(EventKind::ObjectFailed)
                .with_object(error.object.as_str())
                .with_hook(error.kind)
                .with_reason(error.source.to_string()),
        );
    }

    /// Invokes one side of the observer bracket and publishes any isolated panics.
    ///
    /// An uncaught observer panic fails the object before it is resumed.
    fn bracket(&mut self, idx: usize, bracket: Bracket) {
        let invoked = self
            .observers
            .invoke(bracket, &self.entries[idx].object, self.cfg.catch_panics);
        match invoked {
            Ok(panics) => {
                for ev in &panics {
                    self.subscribers.emit(ev);
                }
            }
            Err(payload) => self.abandon_init(idx, payload),
        }
    }

    fn abandon_init(&mut self, idx: usize, payload: PanicPayload) -> ! {
        self.transition(idx, ObjectState::Failed);
        self.subscribers.emit(
            &Event::new(EventKind::ObjectFailed)
                .with_object(self.entries[idx].object.name())
                .with_phase(Phase::Init)
                .with_reason("observer panicked"),
        );
        resume_unwind(payload)
    }

    fn transition(&mut self, idx: usize, next: ObjectState) {
        let entry = &mut self.entries[idx];
        debug_assert!(
            entry.state.can_transition_to(next),
            "illegal transition {} -> {} for '{}'",
            entry.state,
            next,
            entry.object.name()
        );
        tracing::debug!(
            object = entry.object.name(),
            from = %entry.state,
            to = %next,
            "state transition"
        );
        entry.state = next;
    }

    fn publish(&self, idx: usize, kind: EventKind, phase: Phase) {
        self.subscribers.emit(
            &Event::new(kind)
                .with_object(self.entries[idx].object.name())
                .with_phase(phase),
        );
    }

    /// Returns the state of `name` (`Unregistered` if unknown).
    pub fn state(&self, name: &str) -> ObjectState {
        self.index
            .get(name)
            .map_or(ObjectState::Unregistered, |&idx| self.entries[idx].state)
    }

    /// Returns the object registered under `name`.
    pub fn get(&self, name: &str) -> Option<&ManagedObject> {
        self.index.get(name).map(|&idx| &self.entries[idx].object)
    }

    /// Returns all names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.object.name()).collect()
    }

    /// Returns names in the order objects became `Ready`.
    pub fn startup_order(&self) -> Vec<&str> {
        self.names_at(&self.started)
    }

    /// Returns names in the order objects became `Destroyed`.
    pub fn teardown_order(&self) -> Vec<&str> {
        self.names_at(&self.destroyed)
    }

    fn names_at(&self, indices: &[usize]) -> Vec<&str> {
        indices
            .iter()
            .map(|&idx| self.entries[idx].object.name())
            .collect()
    }

    /// Number of registered objects (any state).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing was registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the configuration the registry was built with.
    pub fn config(&self) -> &RegistryConfig {
        &self.cfg
    }
}

impl Drop for Registry {
    fn drop(&mut self) {
        if !self.live.is_empty() {
            tracing::warn!(
                live = ?self.names_at(&self.live),
                "registry dropped without shutdown; destroy hooks not run"
            );
        }
    }
}

/// Turns collected `Continue`-policy failures into the phase result.
fn finish(phase: Phase, failures: Vec<HookError>) -> Result<(), LifecycleError> {
    if failures.is_empty() {
        tracing::debug!(%phase, "phase completed");
        Ok(())
    } else {
        tracing::warn!(%phase, failed = failures.len(), "phase completed with failed hooks");
        Err(LifecycleError::HooksFailed {
            phase,
            errors: failures,
        })
    }
}
