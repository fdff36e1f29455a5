//! # SubscriberSet: synchronous fan-out over multiple subscribers
//!
//! [`SubscriberSet`] delivers each [`Event`] to every subscriber, in subscriber
//! registration order, before `emit` returns.
//!
//! ## What it guarantees
//! - Global FIFO: all subscribers see events in publication order.
//! - Panics inside subscribers are caught and logged (isolation).
//!
//! ## Diagram
//! ```text
//!    emit(&Event)
//!        ├──► S1.on_event()   (catch_unwind)
//!        ├──► S2.on_event()   (catch_unwind)
//!        └──► SN.on_event()   (catch_unwind)
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use crate::core::panic_message;
use crate::events::Event;

use super::Subscribe;

/// Composite fan-out over registered subscribers.
#[derive(Default)]
pub struct SubscriberSet {
    subs: Vec<Arc<dyn Subscribe>>,
}

impl SubscriberSet {
    /// Creates a new set.
    #[must_use]
    pub fn new(subs: Vec<Arc<dyn Subscribe>>) -> Self {
        Self { subs }
    }

    /// Delivers one event to all subscribers.
    ///
    /// A panicking subscriber is logged and skipped for this event only.
    pub fn emit(&self, event: &Event) {
        for sub in &self.subs {
            if let Err(panic) = catch_unwind(AssertUnwindSafe(|| sub.on_event(event))) {
                tracing::warn!(
                    subscriber = sub.name(),
                    seq = event.seq,
                    info = %panic_message(panic.as_ref()),
                    "subscriber panicked"
                );
            }
        }
    }

    /// True if there are no subscribers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }

    /// Number of subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subs.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::events::EventKind;

    #[derive(Default)]
    struct Collect(Mutex<Vec<u64>>);

    impl Subscribe for Collect {
        fn on_event(&self, event: &Event) {
            self.0.lock().unwrap().push(event.seq);
        }
    }

    struct Explode;

    impl Subscribe for Explode {
        fn on_event(&self, _event: &Event) {
            panic!("subscriber bug");
        }

        fn name(&self) -> &'static str {
            "explode"
        }
    }

    #[test]
    fn test_panicking_subscriber_does_not_block_others() {
        let collect = Arc::new(Collect::default());
        let set = SubscriberSet::new(vec![Arc::new(Explode), collect.clone()]);
        assert_eq!(set.len(), 2);

        let a = Event::new(EventKind::ObjectRegistered);
        let b = Event::new(EventKind::ObjectReady);
        set.emit(&a);
        set.emit(&b);

        assert_eq!(*collect.0.lock().unwrap(), vec![a.seq, b.seq]);
    }

    #[test]
    fn test_empty_set() {
        let set = SubscriberSet::default();
        assert!(set.is_empty());
        set.emit(&Event::new(EventKind::ObjectReady));
    }
}
