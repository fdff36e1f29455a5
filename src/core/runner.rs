//! # Run one phase's hooks for a single object.
//!
//! Executes the init (or destroy) hooks of one [`ManagedObject`] in order, publishes a
//! hook event per hook, and applies the [`HookErrorPolicy`].
//!
//! ## Event flow
//!
//! ```text
//! Success:
//!   hook.fire() → Ok(())  → publish HookCompleted
//!
//! Failure:
//!   hook.fire() → Err(e)  → publish HookFailed → HookError
//!
//! Panic (catch_panics = true):
//!   hook.fire() → unwind  → publish HookFailed → HookError { panicked: true }
//!
//! Panic (catch_panics = false):
//!   hook.fire() → unwind  → publish HookFailed → Interrupt::Panicked (caller resumes it)
//! ```
//!
//! ## Rules
//! - Publishes **exactly one** hook event per hook that ran.
//! - `Continue`: failures are appended to `failures`, the next hook runs.
//! - `Abort`: returns the first failure; later hooks of the object stay unfired.
//! - Panics are always caught here so the registry can settle the object's state
//!   before the unwind continues.

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::{
    core::{PanicPayload, RegistryConfig, panic_message},
    error::{BoxError, HookError},
    events::{Event, EventKind},
    objects::{Hook, ManagedObject, Phase},
    subscribers::SubscriberSet,
};

/// Why a phase stopped early for one object.
#[derive(Debug)]
pub(crate) enum Interrupt {
    /// A hook failed under the `Abort` policy.
    Aborted(HookError),
    /// A hook panicked with `catch_panics` off; the payload must be resumed.
    Panicked {
        error: HookError,
        payload: PanicPayload,
    },
}

enum Failure {
    Error(BoxError),
    Panic(PanicPayload),
}

/// Runs every not-yet-fired hook of `phase` on `object`.
///
/// ### Returns
/// - `Ok(())` when all hooks succeeded, or the policy is `Continue`
///   (failures are pushed into `failures`);
/// - `Err(Interrupt::Aborted)` at the first failure when the policy is `Abort`;
/// - `Err(Interrupt::Panicked)` when a hook panicked and `catch_panics` is off.
pub(crate) fn run_hooks(
    object: &mut ManagedObject,
    phase: Phase,
    cfg: &RegistryConfig,
    subs: &SubscriberSet,
    failures: &mut Vec<HookError>,
) -> Result<(), Interrupt> {
    let name = object.name().to_string();

    for hook in object.hooks_mut(phase).iter_mut().filter(|h| !h.fired()) {
        let (source, payload) = match fire(hook) {
            Ok(()) => {
                publish_completed(subs, &name, hook);
                continue;
            }
            Err(Failure::Error(e)) => (e, None),
            Err(Failure::Panic(payload)) => {
                let msg = format!("panicked: {}", panic_message(payload.as_ref()));
                (msg.into(), Some(payload))
            }
        };

        let err = HookError {
            object: name.clone(),
            phase,
            kind: hook.kind(),
            label: hook.label_cow(),
            panicked: payload.is_some(),
            source,
        };
        publish_failed(subs, &err);
        tracing::warn!(
            object = %name,
            %phase,
            kind = %err.kind,
            label = err.as_label(),
            error = %err.source,
            "lifecycle hook failed"
        );

        match payload {
            Some(payload) if !cfg.catch_panics => {
                return Err(Interrupt::Panicked {
                    error: err,
                    payload,
                });
            }
            _ if cfg.hook_errors.aborts() => return Err(Interrupt::Aborted(err)),
            _ => failures.push(err),
        }
    }
    Ok(())
}

/// Fires one hook, catching any panic.
fn fire(hook: &mut Hook) -> Result<(), Failure> {
    match catch_unwind(AssertUnwindSafe(|| hook.fire())) {
        Ok(res) => res.map_err(Failure::Error),
        Err(panic) => Err(Failure::Panic(panic)),
    }
}

/// Publishes `HookCompleted`.
fn publish_completed(subs: &SubscriberSet, object: &str, hook: &Hook) {
    let mut ev = Event::new(EventKind::HookCompleted)
        .with_object(object)
        .with_hook(hook.kind());
    if let Some(label) = hook.label() {
        ev = ev.with_label(label);
    }
    subs.emit(&ev);
}

/// Publishes `HookFailed` with error details.
fn publish_failed(subs: &SubscriberSet, err: &HookError) {
    let mut ev = Event::new(EventKind::HookFailed)
        .with_object(err.object.as_str())
        .with_hook(err.kind)
        .with_reason(err.source.to_string());
    if let Some(label) = err.label.as_deref() {
        ev = ev.with_label(label);
    }
    subs.emit(&ev);
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::policies::HookErrorPolicy;
    use crate::subscribers::Subscribe;

    #[derive(Default)]
    struct Kinds(Mutex<Vec<EventKind>>);

    impl Subscribe for Kinds {
        fn on_event(&self, event: &Event) {
            self.0.lock().unwrap().push(event.kind);
        }
    }

    fn failing_object() -> ManagedObject {
        ManagedObject::builder("x")
            .after_properties_set(|| Ok(()))
            .init_method(|| Err("bad config".into()))
            .post_construct(|| panic!("post-construct exploded"))
            .build()
    }

    #[test]
    fn test_continue_runs_all_and_collects() {
        let kinds = Arc::new(Kinds::default());
        let subs = SubscriberSet::new(vec![kinds.clone()]);
        let mut obj = failing_object();
        let mut failures = Vec::new();

        let res = run_hooks(&mut obj, Phase::Init, &RegistryConfig::default(), &subs, &mut failures);

        assert!(res.is_ok());
        assert_eq!(failures.len(), 2);
        assert!(!failures[0].panicked);
        assert!(failures[1].panicked);
        assert_eq!(failures[1].source.to_string(), "panicked: post-construct exploded");
        assert!(obj.init_hooks().iter().all(Hook::fired));
        assert_eq!(
            *kinds.0.lock().unwrap(),
            vec![EventKind::HookCompleted, EventKind::HookFailed, EventKind::HookFailed]
        );
    }

    #[test]
    fn test_abort_stops_at_first_failure() {
        let subs = SubscriberSet::default();
        let cfg = RegistryConfig::with_policy(HookErrorPolicy::Abort);
        let mut obj = failing_object();
        let mut failures = Vec::new();

        let err = match run_hooks(&mut obj, Phase::Init, &cfg, &subs, &mut failures) {
            Err(Interrupt::Aborted(err)) => err,
            _ => panic!("expected an abort"),
        };

        assert_eq!(err.kind, crate::HookKind::InitMethod);
        assert!(failures.is_empty());
        let fired: Vec<bool> = obj.init_hooks().iter().map(Hook::fired).collect();
        assert_eq!(fired, vec![true, true, false]);
    }

    #[test]
    fn test_only_requested_phase_runs() {
        let subs = SubscriberSet::default();
        let mut obj = ManagedObject::builder("x")
            .init_method(|| Ok(()))
            .disposable(|| Ok(()))
            .build();
        let mut failures = Vec::new();

        run_hooks(&mut obj, Phase::Destroy, &RegistryConfig::default(), &subs, &mut failures)
            .unwrap();

        assert!(!obj.init_hooks()[0].fired());
        assert!(obj.destroy_hooks()[0].fired());
    }

    #[test]
    fn test_uncaught_panic_is_handed_back() {
        let kinds = Arc::new(Kinds::default());
        let subs = SubscriberSet::new(vec![kinds.clone()]);
        let cfg = RegistryConfig {
            catch_panics: false,
            ..RegistryConfig::default()
        };
        let mut obj = ManagedObject::builder("x")
            .init_method(|| panic!("wiring bug"))
            .post_construct(|| Ok(()))
            .build();
        let mut failures = Vec::new();

        match run_hooks(&mut obj, Phase::Init, &cfg, &subs, &mut failures) {
            Err(Interrupt::Panicked { error, payload }) => {
                assert!(error.panicked);
                assert_eq!(panic_message(payload.as_ref()), "wiring bug");
            }
            _ => panic!("expected the panic to be handed back"),
        }
        assert!(failures.is_empty());
        assert!(!obj.init_hooks()[1].fired());
        assert_eq!(*kinds.0.lock().unwrap(), vec![EventKind::HookFailed]);
    }
}
