//! Post-processing observers.
//!
//! - [`Observer`] trait with `before_init` / `after_init` callbacks.
//! - `ObserverSet` ordered list of observers with optional panic isolation.

mod observer;
mod set;

pub use observer::Observer;
pub(crate) use set::Bracket;
pub(crate) use set::ObserverSet;
