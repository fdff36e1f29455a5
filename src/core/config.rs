//! # Registry configuration.
//!
//! Provides [`RegistryConfig`] centralized settings for a [`Registry`](crate::Registry).
//!
//! Config is consumed once, by `Registry::builder(config)`.

use crate::policies::HookErrorPolicy;

/// Configuration for a registry.
///
/// ## Field semantics
/// - `hook_errors`: what `start()`/`shutdown()` do when a hook fails
/// - `catch_panics`: convert hook panics into `HookError`s and isolate observer panics
///
/// ## Notes
/// All fields are public for flexibility.
#[derive(Clone, Debug)]
pub struct RegistryConfig {
    /// Policy applied to failing hooks.
    ///
    /// - `Continue` = run every hook, report all failures after the phase
    /// - `Abort` = stop the phase at the first failure
    pub hook_errors: HookErrorPolicy,

    /// Catch panics raised by hooks and observers.
    ///
    /// - `true` = a panicking hook becomes a `HookError` with `panicked = true`;
    ///   a panicking observer is reported as `EventKind::ObserverPanicked`
    /// - `false` = panics unwind through `start()`/`shutdown()`; the object is
    ///   first settled as `Failed` (init) or `Destroyed` (destroy)
    pub catch_panics: bool,
}

impl RegistryConfig {
    /// Returns a config with the given hook error policy and default panic handling.
    #[inline]
    pub fn with_policy(hook_errors: HookErrorPolicy) -> Self {
        Self {
            hook_errors,
            ..Self::default()
        }
    }
}

impl Default for RegistryConfig {
    /// Default configuration:
    ///
    /// - `hook_errors = HookErrorPolicy::Continue` (continue, collect errors)
    /// - `catch_panics = true`
    fn default() -> Self {
        Self {
            hook_errors: HookErrorPolicy::default(),
            catch_panics: true,
        }
    }
}
