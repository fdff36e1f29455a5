//! # Per-object lifecycle state.
//!
//! ```text
//! Unregistered ─► Registered ─► Initializing ─► Ready ─► Destroying ─► Destroyed
//!                                    │
//!                                    └─► Failed   (Abort policy, or an uncaught panic)
//! ```
//!
//! No transition skips a state. `Destroyed` and `Failed` are terminal.

use std::fmt;

/// Lifecycle state of a managed object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectState {
    /// Not known to the registry.
    Unregistered,
    /// Accepted by `register()`, init hooks not yet run.
    Registered,
    /// Observers and init hooks are running.
    Initializing,
    /// Initialized; will be torn down by `shutdown()`.
    Ready,
    /// Destroy hooks are running.
    Destroying,
    /// Torn down. Terminal.
    Destroyed,
    /// Init aborted by a failing hook. Terminal; destroy hooks never run.
    Failed,
}

impl ObjectState {
    /// Returns `true` if `next` is a legal successor of `self`.
    pub fn can_transition_to(&self, next: ObjectState) -> bool {
        use ObjectState::*;
        matches!(
            (self, next),
            (Unregistered, Registered)
                | (Registered, Initializing)
                | (Initializing, Ready)
                | (Initializing, Failed)
                | (Ready, Destroying)
                | (Destroying, Destroyed)
        )
    }

    /// Returns `true` for states with no successor.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, ObjectState::Destroyed | ObjectState::Failed)
    }

    /// Returns a short stable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectState::Unregistered => "unregistered",
            ObjectState::Registered => "registered",
            ObjectState::Initializing => "initializing",
            ObjectState::Ready => "ready",
            ObjectState::Destroying => "destroying",
            ObjectState::Destroyed => "destroyed",
            ObjectState::Failed => "failed",
        }
    }
}

impl fmt::Display for ObjectState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
