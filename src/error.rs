//! Error types used by the lifevisor registry and hooks.
//!
//! This module defines three error types:
//!
//! - [`RegistryError`] — errors raised by registry bookkeeping (registration).
//! - [`HookError`] — a single failed init/destroy hook.
//! - [`LifecycleError`] — the outcome of a failed `start()`/`shutdown()` phase.
//!
//! All of them provide helper methods (`as_label`, `as_message`) for logs and events.

use std::borrow::Cow;

use thiserror::Error;

use crate::objects::{HookKind, Phase};

/// Boxed error returned by user hooks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// # Errors produced by registry bookkeeping.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RegistryError {
    /// An object with the same name is already registered.
    #[error("object '{name}' is already registered")]
    DuplicateName {
        /// The rejected name.
        name: String,
    },
}

impl RegistryError {
    /// Returns a short stable label (snake_case) for use in logs/events.
    ///
    /// # Example
    /// ```
    /// use lifevisor::RegistryError;
    ///
    /// let err = RegistryError::DuplicateName { name: "db".into() };
    /// assert_eq!(err.as_label(), "registry_duplicate_name");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RegistryError::DuplicateName { .. } => "registry_duplicate_name",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RegistryError::DuplicateName { name } => format!("duplicate name: {name}"),
        }
    }
}

/// # A failed lifecycle hook.
///
/// Wraps whatever the hook returned (or the panic message, if the hook panicked
/// and panic isolation is enabled) together with the owning object, the phase
/// and the hook kind.
#[derive(Error, Debug)]
#[error("{phase} hook {kind} of '{object}' failed: {source}")]
pub struct HookError {
    /// Name of the object whose hook failed.
    pub object: String,
    /// Phase the hook belongs to.
    pub phase: Phase,
    /// Kind of the failed hook.
    pub kind: HookKind,
    /// Optional hook label given at registration.
    pub label: Option<Cow<'static, str>>,
    /// `true` if the hook panicked instead of returning an error.
    pub panicked: bool,
    /// Underlying failure.
    #[source]
    pub source: BoxError,
}

impl HookError {
    /// Returns a short stable label (snake_case) for use in logs/events.
    pub fn as_label(&self) -> &'static str {
        if self.panicked {
            "hook_panicked"
        } else {
            "hook_failed"
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match &self.label {
            Some(label) => format!("{}/{} ({label}): {}", self.object, self.kind, self.source),
            None => format!("{}/{}: {}", self.object, self.kind, self.source),
        }
    }
}

/// # Outcome of a failed `start()` or `shutdown()`.
///
/// Which variant is produced depends on
/// [`HookErrorPolicy`](crate::HookErrorPolicy):
/// - `Continue` → [`LifecycleError::HooksFailed`] once the whole phase has run;
/// - `Abort` → [`LifecycleError::Aborted`] at the first failing hook.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum LifecycleError {
    /// The phase stopped at the first failing hook.
    #[error("{phase} aborted: {error}")]
    Aborted {
        /// Phase that was aborted.
        phase: Phase,
        /// The hook failure that stopped the phase.
        #[source]
        error: HookError,
    },

    /// The phase ran to completion but some hooks failed.
    #[error("{phase} completed with {} failed hook(s)", .errors.len())]
    HooksFailed {
        /// Phase that was run.
        phase: Phase,
        /// Failures in the order they happened.
        errors: Vec<HookError>,
    },
}

impl LifecycleError {
    /// Returns a short stable label (snake_case) for use in logs/events.
    pub fn as_label(&self) -> &'static str {
        match self {
            LifecycleError::Aborted { .. } => "lifecycle_aborted",
            LifecycleError::HooksFailed { .. } => "lifecycle_hooks_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            LifecycleError::Aborted { phase, error } => {
                format!("{phase} aborted at {}", error.as_message())
            }
            LifecycleError::HooksFailed { phase, errors } => {
                let failed: Vec<String> = errors.iter().map(HookError::as_message).collect();
                format!("{phase} failed hooks={failed:?}")
            }
        }
    }

    /// Phase that produced this error.
    pub fn phase(&self) -> Phase {
        match self {
            LifecycleError::Aborted { phase, .. } | LifecycleError::HooksFailed { phase, .. } => {
                *phase
            }
        }
    }

    /// All hook failures carried by this error.
    pub fn hook_errors(&self) -> Vec<&HookError> {
        match self {
            LifecycleError::Aborted { error, .. } => vec![error],
            LifecycleError::HooksFailed { errors, .. } => errors.iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hook_error(object: &str, kind: HookKind) -> HookError {
        HookError {
            object: object.to_string(),
            phase: kind.phase(),
            kind,
            label: None,
            panicked: false,
            source: "boom".into(),
        }
    }

    #[test]
    fn test_hook_error_display_names_object_and_kind() {
        let err = hook_error("db", HookKind::InitMethod);
        assert_eq!(err.to_string(), "init hook init-method of 'db' failed: boom");
        assert_eq!(err.as_label(), "hook_failed");
    }

    #[test]
    fn test_hook_error_label_in_message() {
        let mut err = hook_error("db", HookKind::PreDestroy);
        err.label = Some("flush".into());
        err.panicked = true;
        assert_eq!(err.as_message(), "db/pre-destroy (flush): boom");
        assert_eq!(err.as_label(), "hook_panicked");
    }

    #[test]
    fn test_lifecycle_error_collects_hook_errors() {
        let err = LifecycleError::HooksFailed {
            phase: Phase::Destroy,
            errors: vec![
                hook_error("a", HookKind::Disposable),
                hook_error("b", HookKind::DestroyMethod),
            ],
        };
        assert_eq!(err.phase(), Phase::Destroy);
        assert_eq!(err.hook_errors().len(), 2);
        assert_eq!(err.to_string(), "destroy completed with 2 failed hook(s)");
        assert_eq!(err.as_label(), "lifecycle_hooks_failed");
    }

    #[test]
    fn test_aborted_exposes_source() {
        use std::error::Error as _;

        let err = LifecycleError::Aborted {
            phase: Phase::Init,
            error: hook_error("a", HookKind::AfterPropertiesSet),
        };
        assert!(err.source().is_some());
        assert_eq!(err.hook_errors()[0].object, "a");
    }
}
