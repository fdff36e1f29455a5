//! # LogWriter — simple event printer
//!
//! A minimal subscriber that prints incoming [`Event`]s to stdout.
//! Use it for test or demo.
//!
//! ## Example output
//! ```text
//! [registered] object="cache"
//! [initializing] object="cache"
//! [hook] object="cache" kind=after-properties-set label=None
//! [hook-failed] object="cache" kind=init-method err="connection refused"
//! [ready] object="cache"
//! [destroying] object="cache"
//! [destroyed] object="cache"
//! ```

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Event writer subscriber.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Subscribe for LogWriter {
    fn on_event(&self, e: &Event) {
        let object = e.object.as_deref().unwrap_or("unknown");
        match e.kind {
            EventKind::ObjectRegistered => {
                println!("[registered] object={object:?}");
            }
            EventKind::ObjectInitializing => {
                println!("[initializing] object={object:?}");
            }
            EventKind::ObjectReady => {
                println!("[ready] object={object:?}");
            }
            EventKind::ObjectFailed => {
                println!("[failed] object={object:?} kind={:?} err={:?}", e.hook, e.reason);
            }
            EventKind::ObjectDestroying => {
                println!("[destroying] object={object:?}");
            }
            EventKind::ObjectDestroyed => {
                println!("[destroyed] object={object:?}");
            }
            EventKind::HookCompleted => {
                println!(
                    "[hook] object={object:?} kind={} label={:?}",
                    e.hook.map(|k| k.as_str()).unwrap_or("unknown"),
                    e.label
                );
            }
            EventKind::HookFailed => {
                println!(
                    "[hook-failed] object={object:?} kind={} err={:?}",
                    e.hook.map(|k| k.as_str()).unwrap_or("unknown"),
                    e.reason
                );
            }
            EventKind::ObserverPanicked => {
                println!(
                    "[observer-panicked] observer={} object={object:?} info={}",
                    e.label.as_deref().unwrap_or("unknown"),
                    e.reason.as_deref().unwrap_or("unknown"),
                );
            }
        }
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}
