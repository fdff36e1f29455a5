//! # ObserverSet: ordered observer invocation.
//!
//! Calls every observer in registration order. With panic isolation enabled a
//! panicking observer is skipped for that call and reported as an
//! [`EventKind::ObserverPanicked`](crate::EventKind::ObserverPanicked) event.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use crate::core::{PanicPayload, panic_message};
use crate::events::Event;
use crate::objects::ManagedObject;

use super::Observer;

/// Which side of the init bracket is being invoked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Bracket {
    Before,
    After,
}

/// Ordered collection of observers, owned by the registry.
#[derive(Default)]
pub(crate) struct ObserverSet {
    observers: Vec<Arc<dyn Observer>>,
}

impl ObserverSet {
    /// Creates a new set; invocation order equals `observers` order.
    #[must_use]
    pub fn new(observers: Vec<Arc<dyn Observer>>) -> Self {
        Self { observers }
    }

    /// Invokes one side of the bracket on every observer.
    ///
    /// Returns one event per panicking observer when `catch_panics` is on.
    /// With `catch_panics` off the first panic stops the loop and its payload is
    /// returned, so the caller can settle the object before resuming it.
    pub(crate) fn invoke(
        &self,
        bracket: Bracket,
        object: &ManagedObject,
        catch_panics: bool,
    ) -> Result<Vec<Event>, PanicPayload> {
        let mut panics = Vec::new();
        for obs in &self.observers {
            let call = || match bracket {
                Bracket::Before => obs.before_init(object),
                Bracket::After => obs.after_init(object),
            };

            if let Err(panic) = catch_unwind(AssertUnwindSafe(call)) {
                if !catch_panics {
                    return Err(panic);
                }
                let info = panic_message(panic.as_ref());
                tracing::warn!(
                    observer = obs.name(),
                    object = object.name(),
                    ?bracket,
                    info = %info,
                    "observer panicked"
                );
                panics.push(Event::observer_panicked(obs.name(), object.name(), info));
            }
        }
        Ok(panics)
    }

    /// Number of observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct Named(&'static str, Arc<Mutex<Vec<String>>>);

    impl Observer for Named {
        fn before_init(&self, object: &ManagedObject) {
            self.1.lock().unwrap().push(format!("{}:before:{}", self.0, object.name()));
        }

        fn after_init(&self, object: &ManagedObject) {
            self.1.lock().unwrap().push(format!("{}:after:{}", self.0, object.name()));
        }

        fn name(&self) -> &'static str {
            self.0
        }
    }

    struct Faulty;

    impl Observer for Faulty {
        fn before_init(&self, _object: &ManagedObject) {
            panic!("observer bug");
        }

        fn name(&self) -> &'static str {
            "faulty"
        }
    }

    #[test]
    fn test_invokes_in_registration_order() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let set = ObserverSet::new(vec![
            Arc::new(Named("o1", journal.clone())),
            Arc::new(Named("o2", journal.clone())),
        ]);
        let obj = ManagedObject::new("a");

        assert!(set.invoke(Bracket::Before, &obj, true).unwrap().is_empty());
        assert!(set.invoke(Bracket::After, &obj, true).unwrap().is_empty());

        assert_eq!(
            *journal.lock().unwrap(),
            vec!["o1:before:a", "o2:before:a", "o1:after:a", "o2:after:a"]
        );
    }

    #[test]
    fn test_panic_is_isolated_and_reported() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let set = ObserverSet::new(vec![
            Arc::new(Faulty),
            Arc::new(Named("o2", journal.clone())),
        ]);
        let obj = ManagedObject::new("a");

        let events = set.invoke(Bracket::Before, &obj, true).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].label.as_deref(), Some("faulty"));
        assert_eq!(events[0].reason.as_deref(), Some("observer bug"));
        assert_eq!(*journal.lock().unwrap(), vec!["o2:before:a"]);
    }

    #[test]
    fn test_default_methods_are_noops() {
        struct Silent;
        impl Observer for Silent {}

        let set = ObserverSet::new(vec![Arc::new(Silent)]);
        let obj = ManagedObject::new("a");
        assert!(set.invoke(Bracket::After, &obj, false).unwrap().is_empty());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_uncaught_panic_stops_and_returns_payload() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let set = ObserverSet::new(vec![
            Arc::new(Faulty),
            Arc::new(Named("o2", journal.clone())),
        ]);
        let obj = ManagedObject::new("a");

        let payload = set.invoke(Bracket::Before, &obj, false).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "observer bug");
        assert!(journal.lock().unwrap().is_empty());
    }
}
