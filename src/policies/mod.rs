//! Lifecycle policies.
//!
//! ## Contents
//! - [`HookErrorPolicy`] abort the phase on the first hook failure, or continue and collect
//!
//! ## Defaults
//! - `HookErrorPolicy::Continue`: no hook is skipped because another one failed.

mod hook_error;

pub use hook_error::HookErrorPolicy;
