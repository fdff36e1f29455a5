//! # Managed objects and hooks.
//!
//! This module provides the object-side types:
//! - [`ManagedObject`] - a named component with ordered init/destroy hooks
//! - [`ManagedObjectBuilder`] - declares hooks in any order, sorts them once
//! - [`Hook`] - a single callback tagged with a [`HookKind`]
//! - [`HookKind`], [`Phase`] - fixed hook kinds and the phase they run in

mod hook;
mod object;

pub use hook::{Hook, HookFn, HookKind, Phase};
pub use object::{ManagedObject, ManagedObjectBuilder};
