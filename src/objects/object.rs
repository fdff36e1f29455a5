//! # Managed objects and their builder.
//!
//! [`ManagedObject`] bundles a name with two hook lists. The lists are sorted by
//! [`HookKind::precedence`] once, in [`ManagedObjectBuilder::build`], and never change
//! afterwards; the registry only flips each hook's `fired` flag.
//!
//! ## Example
//! ```rust
//! use lifevisor::{HookKind, ManagedObject};
//!
//! let obj = ManagedObject::builder("cache")
//!     .post_construct(|| Ok(()))
//!     .after_properties_set(|| Ok(()))
//!     .pre_destroy(|| Ok(()))
//!     .build();
//!
//! let kinds: Vec<HookKind> = obj.init_hooks().iter().map(|h| h.kind()).collect();
//! assert_eq!(kinds, vec![HookKind::AfterPropertiesSet, HookKind::PostConstruct]);
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::error::BoxError;
use crate::objects::hook::{Hook, HookKind, Phase};

/// A named component whose lifecycle is driven by the registry.
pub struct ManagedObject {
    name: Cow<'static, str>,
    init: Vec<Hook>,
    destroy: Vec<Hook>,
}

impl ManagedObject {
    /// Creates an object without hooks.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            init: Vec::new(),
            destroy: Vec::new(),
        }
    }

    /// Starts building an object with hooks.
    pub fn builder(name: impl Into<Cow<'static, str>>) -> ManagedObjectBuilder {
        ManagedObjectBuilder {
            name: name.into(),
            hooks: Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Init hooks in the order they will run.
    #[inline]
    pub fn init_hooks(&self) -> &[Hook] {
        &self.init
    }

    /// Destroy hooks in the order they will run.
    #[inline]
    pub fn destroy_hooks(&self) -> &[Hook] {
        &self.destroy
    }

    /// Returns `true` if at least one hook of `kind` is declared.
    pub fn has_hook(&self, kind: HookKind) -> bool {
        self.hooks(kind.phase()).iter().any(|h| h.kind() == kind)
    }

    /// Hooks of a phase, in run order.
    pub fn hooks(&self, phase: Phase) -> &[Hook] {
        match phase {
            Phase::Init => &self.init,
            Phase::Destroy => &self.destroy,
        }
    }

    pub(crate) fn hooks_mut(&mut self, phase: Phase) -> &mut [Hook] {
        match phase {
            Phase::Init => &mut self.init,
            Phase::Destroy => &mut self.destroy,
        }
    }
}

impl fmt::Debug for ManagedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagedObject")
            .field("name", &self.name)
            .field("init", &self.init)
            .field("destroy", &self.destroy)
            .finish()
    }
}

/// Builder for [`ManagedObject`].
///
/// Hooks may be added in any order; `build()` arranges them by kind precedence and
/// keeps declaration order between hooks of the same kind.
pub struct ManagedObjectBuilder {
    name: Cow<'static, str>,
    hooks: Vec<Hook>,
}

impl ManagedObjectBuilder {
    /// Adds a prepared hook. Its phase follows from its kind.
    #[must_use]
    pub fn hook(mut self, hook: Hook) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Adds a callback of the given kind.
    #[must_use]
    pub fn on<F>(self, kind: HookKind, f: F) -> Self
    where
        F: FnMut() -> Result<(), BoxError> + Send + 'static,
    {
        self.hook(Hook::new(kind, f))
    }

    #[must_use]
    pub fn after_properties_set<F>(self, f: F) -> Self
    where
        F: FnMut() -> Result<(), BoxError> + Send + 'static,
    {
        self.on(HookKind::AfterPropertiesSet, f)
    }

    #[must_use]
    pub fn init_method<F>(self, f: F) -> Self
    where
        F: FnMut() -> Result<(), BoxError> + Send + 'static,
    {
        self.on(HookKind::InitMethod, f)
    }

    #[must_use]
    pub fn post_construct<F>(self, f: F) -> Self
    where
        F: FnMut() -> Result<(), BoxError> + Send + 'static,
    {
        self.on(HookKind::PostConstruct, f)
    }

    #[must_use]
    pub fn destroy_method<F>(self, f: F) -> Self
    where
        F: FnMut() -> Result<(), BoxError> + Send + 'static,
    {
        self.on(HookKind::DestroyMethod, f)
    }

    #[must_use]
    pub fn disposable<F>(self, f: F) -> Self
    where
        F: FnMut() -> Result<(), BoxError> + Send + 'static,
    {
        self.on(HookKind::Disposable, f)
    }

    #[must_use]
    pub fn pre_destroy<F>(self, f: F) -> Self
    where
        F: FnMut() -> Result<(), BoxError> + Send + 'static,
    {
        self.on(HookKind::PreDestroy, f)
    }

    /// Finishes the object.
    pub fn build(self) -> ManagedObject {
        let (mut init, mut destroy): (Vec<Hook>, Vec<Hook>) = self
            .hooks
            .into_iter()
            .partition(|h| h.phase() == Phase::Init);

        // sort_by_key is stable
        init.sort_by_key(|h| h.kind().precedence());
        destroy.sort_by_key(|h| h.kind().precedence());

        ManagedObject {
            name: self.name,
            init,
            destroy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> Result<(), BoxError> {
        Ok(())
    }

    fn kinds(hooks: &[Hook]) -> Vec<HookKind> {
        hooks.iter().map(Hook::kind).collect()
    }

    #[test]
    fn test_new_has_no_hooks() {
        let obj = ManagedObject::new("plain");
        assert_eq!(obj.name(), "plain");
        assert!(obj.init_hooks().is_empty());
        assert!(obj.destroy_hooks().is_empty());
    }

    #[test]
    fn test_build_routes_hooks_by_phase() {
        let obj = ManagedObject::builder("x")
            .pre_destroy(noop)
            .init_method(noop)
            .disposable(noop)
            .build();

        assert_eq!(kinds(obj.init_hooks()), vec![HookKind::InitMethod]);
        assert_eq!(
            kinds(obj.destroy_hooks()),
            vec![HookKind::Disposable, HookKind::PreDestroy]
        );
        assert!(obj.has_hook(HookKind::Disposable));
        assert!(!obj.has_hook(HookKind::DestroyMethod));
    }

    #[test]
    fn test_build_sorts_by_precedence() {
        let obj = ManagedObject::builder("many")
            .post_construct(noop)
            .init_method(noop)
            .after_properties_set(noop)
            .pre_destroy(noop)
            .disposable(noop)
            .destroy_method(noop)
            .build();

        assert_eq!(kinds(obj.init_hooks()), HookKind::INIT.to_vec());
        assert_eq!(kinds(obj.destroy_hooks()), HookKind::DESTROY.to_vec());
    }

    #[test]
    fn test_same_kind_keeps_declaration_order() {
        let obj = ManagedObject::builder("dup")
            .hook(Hook::new(HookKind::PostConstruct, noop).with_label("second-kind"))
            .hook(Hook::new(HookKind::InitMethod, noop).with_label("first"))
            .hook(Hook::new(HookKind::InitMethod, noop).with_label("second"))
            .build();

        let labels: Vec<Option<&str>> = obj.init_hooks().iter().map(Hook::label).collect();
        assert_eq!(labels, vec![Some("first"), Some("second"), Some("second-kind")]);
    }
}
