//! # Lifecycle hooks.
//!
//! A [`Hook`] is a zero-argument callback tagged with a [`HookKind`]. The kind decides
//! the phase the hook runs in and its precedence inside that phase:
//!
//! ```text
//! Phase::Init     AfterPropertiesSet ─► InitMethod ─► PostConstruct
//! Phase::Destroy  DestroyMethod      ─► Disposable ─► PreDestroy
//! ```
//!
//! Hooks of the same kind keep their declaration order.

use std::borrow::Cow;
use std::fmt;

use crate::error::BoxError;

/// Boxed hook callback.
pub type HookFn = Box<dyn FnMut() -> Result<(), BoxError> + Send + 'static>;

/// Lifecycle phase a hook belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Runs during `Registry::start()`.
    Init,
    /// Runs during `Registry::shutdown()`.
    Destroy,
}

impl Phase {
    /// Returns a short stable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Init => "init",
            Phase::Destroy => "destroy",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed set of hook kinds.
///
/// Variants are declared in precedence order within each phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    // === Init ===
    /// Interface-style hook ("properties are set, finish initialization").
    AfterPropertiesSet,
    /// Explicit init-method named at declaration.
    InitMethod,
    /// Post-construct-style hook.
    PostConstruct,

    // === Destroy ===
    /// Explicit destroy-method named at declaration.
    DestroyMethod,
    /// Interface-style disposable hook.
    Disposable,
    /// Pre-destroy-style hook.
    PreDestroy,
}

impl HookKind {
    /// Init kinds in precedence order.
    pub const INIT: [HookKind; 3] = [
        HookKind::AfterPropertiesSet,
        HookKind::InitMethod,
        HookKind::PostConstruct,
    ];

    /// Destroy kinds in precedence order.
    pub const DESTROY: [HookKind; 3] = [
        HookKind::DestroyMethod,
        HookKind::Disposable,
        HookKind::PreDestroy,
    ];

    /// Phase this kind runs in.
    pub fn phase(&self) -> Phase {
        match self {
            HookKind::AfterPropertiesSet | HookKind::InitMethod | HookKind::PostConstruct => {
                Phase::Init
            }
            HookKind::DestroyMethod | HookKind::Disposable | HookKind::PreDestroy => {
                Phase::Destroy
            }
        }
    }

    /// Position inside the phase (0 runs first).
    pub fn precedence(&self) -> u8 {
        match self {
            HookKind::AfterPropertiesSet | HookKind::DestroyMethod => 0,
            HookKind::InitMethod | HookKind::Disposable => 1,
            HookKind::PostConstruct | HookKind::PreDestroy => 2,
        }
    }

    /// Returns a short stable label (kebab-case).
    pub fn as_str(&self) -> &'static str {
        match self {
            HookKind::AfterPropertiesSet => "after-properties-set",
            HookKind::InitMethod => "init-method",
            HookKind::PostConstruct => "post-construct",
            HookKind::DestroyMethod => "destroy-method",
            HookKind::Disposable => "disposable",
            HookKind::PreDestroy => "pre-destroy",
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lifecycle callback.
///
/// Fires at most once: after the first [`fire`](Hook::fire) the callback is
/// never invoked again, whatever it returned.
pub struct Hook {
    kind: HookKind,
    label: Option<Cow<'static, str>>,
    f: HookFn,
    fired: bool,
}

impl Hook {
    /// Creates a hook of the given kind.
    pub fn new<F>(kind: HookKind, f: F) -> Self
    where
        F: FnMut() -> Result<(), BoxError> + Send + 'static,
    {
        Self {
            kind,
            label: None,
            f: Box::new(f),
            fired: false,
        }
    }

    /// Attaches a label shown in events and errors (e.g. the method name).
    #[must_use]
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[inline]
    pub fn kind(&self) -> HookKind {
        self.kind
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.kind.phase()
    }

    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// True once the hook has been invoked.
    #[inline]
    pub fn fired(&self) -> bool {
        self.fired
    }

    pub(crate) fn label_cow(&self) -> Option<Cow<'static, str>> {
        self.label.clone()
    }

    /// Invokes the callback unless it already ran.
    pub(crate) fn fire(&mut self) -> Result<(), BoxError> {
        if self.fired {
            return Ok(());
        }
        self.fired = true;
        (self.f)()
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hook")
            .field("kind", &self.kind)
            .field("label", &self.label)
            .field("fired", &self.fired)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_split_by_phase() {
        assert!(HookKind::INIT.iter().all(|k| k.phase() == Phase::Init));
        assert!(HookKind::DESTROY.iter().all(|k| k.phase() == Phase::Destroy));
    }

    #[test]
    fn test_precedence_matches_declared_arrays() {
        for (i, k) in HookKind::INIT.iter().enumerate() {
            assert_eq!(k.precedence() as usize, i);
        }
        for (i, k) in HookKind::DESTROY.iter().enumerate() {
            assert_eq!(k.precedence() as usize, i);
        }
    }

    #[test]
    fn test_fire_runs_once() {
        let counter = std::sync::Arc::new(std::sync::atomic::AtomicU32::new(0));
        let c = counter.clone();
        let mut hook = Hook::new(HookKind::InitMethod, move || {
            c.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Ok(())
        });

        for _ in 0..3 {
            hook.fire().unwrap();
        }
        assert!(hook.fired());
        assert_eq!(counter.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_hook_is_still_spent() {
        let mut hook = Hook::new(HookKind::Disposable, || Err("nope".into())).with_label("close");
        assert!(hook.fire().is_err());
        assert!(hook.fire().is_ok());
        assert_eq!(hook.label(), Some("close"));
    }
}
