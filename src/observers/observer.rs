//! # Observer: post-processing hooks around initialization
//!
//! The [`Observer`] trait is the cross-cutting **extension point** of the registry.
//! Every observer brackets every object's init hooks:
//!
//! ```text
//! start():
//!   for object in registration order:
//!     ├─► O1.before_init(obj) ─► O2.before_init(obj) ─► ... (observer registration order)
//!     ├─► obj init hooks (AfterPropertiesSet ─► InitMethod ─► PostConstruct)
//!     └─► O1.after_init(obj)  ─► O2.after_init(obj)  ─► ...
//! ```
//!
//! Brackets never overlap: `after_init(A)` returns before `before_init(B)` is called.
//!
//! # Example: counting observer
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use lifevisor::{ManagedObject, Observer};
//!
//! #[derive(Default)]
//! struct Counter(AtomicUsize);
//!
//! impl Observer for Counter {
//!     fn after_init(&self, _object: &ManagedObject) {
//!         self.0.fetch_add(1, Ordering::Relaxed);
//!     }
//!
//!     fn name(&self) -> &'static str { "counter" }
//! }
//! ```

use crate::objects::ManagedObject;

/// # Callback pair invoked around each object's initialization.
///
/// Both methods default to no-ops, so implementors override only what they need.
///
/// The object is passed by shared reference and both methods return `()`.
/// Observers can inspect an object but never replace it: the registry always
/// keeps the instance that was registered.
/// Wrapping belongs in the code that builds the [`ManagedObject`] before
/// `register()`.
pub trait Observer: Send + Sync + 'static {
    /// Called after the object entered `Initializing`, before its first init hook.
    fn before_init(&self, object: &ManagedObject) {
        let _ = object;
    }

    /// Called after the object's last init hook, before it becomes `Ready`.
    fn after_init(&self, object: &ManagedObject) {
        let _ = object;
    }

    /// Returns the observer name used in events and logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
