//! # Hook error policy.
//!
//! [`HookErrorPolicy`] decides what the registry does when a hook fails during
//! `start()` or `shutdown()`.
//!
//! - [`HookErrorPolicy::Continue`] every remaining hook still runs; failures are collected (default).
//! - [`HookErrorPolicy::Abort`] the phase stops at the first failure.
//!
//! ## State effects
//! ```text
//! Continue  failing object still reaches Ready / Destroyed
//!           └─► LifecycleError::HooksFailed after the whole phase
//!
//! Abort     start():    failing object ─► Failed, later objects stay Registered
//!           shutdown(): failing object ─► Destroyed, earlier objects stay Ready
//!           └─► LifecycleError::Aborted immediately
//! ```
//!
//! Calling the phase again after an abort resumes with the untouched objects.

/// Policy applied when an init or destroy hook fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HookErrorPolicy {
    /// Keep running the remaining hooks and report all failures at the end (default).
    #[default]
    Continue,
    /// Stop the phase at the first failing hook.
    Abort,
}

impl HookErrorPolicy {
    /// Returns `true` if a failure should stop the phase.
    #[inline]
    pub fn aborts(&self) -> bool {
        matches!(self, HookErrorPolicy::Abort)
    }
}
