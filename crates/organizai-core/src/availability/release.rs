//! Pointer-release guard.
//!
//! A gesture must end no matter where the pointer is released. The guard
//! holds a single subscription for the lifetime of a drag session: it is
//! registered when the session begins and dropped on commit. While it is
//! held, every release signal, whatever its origin, reaches the model.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Where a pointer release (or equivalent gesture end) was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseOrigin {
    /// Pointer-up over a grid cell.
    Grid,
    /// Pointer-up elsewhere in the window.
    Window,
    /// Pointer left the window with the button still held.
    LeftWindow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SubscriptionId(u64);

#[derive(Debug, Default)]
pub(crate) struct ReleaseGuard {
    active: Option<SubscriptionId>,
    issued: u64,
}

impl ReleaseGuard {
    /// Register the release subscription. Re-subscribing replaces the
    /// previous subscription; there is never more than one.
    pub(crate) fn subscribe(&mut self) -> SubscriptionId {
        self.issued += 1;
        let id = SubscriptionId(self.issued);
        self.active = Some(id);
        id
    }

    /// Drop the subscription, returning it if one was held.
    pub(crate) fn unsubscribe(&mut self) -> Option<SubscriptionId> {
        self.active.take()
    }

    #[cfg(test)]
    fn is_subscribed(&self) -> bool {
        self.active.is_some()
    }

    /// Deliver a release signal. Any origin ends the subscription; the
    /// dropped subscription is returned, or `None` when nothing was held.
    pub(crate) fn release(&mut self, origin: ReleaseOrigin) -> Option<SubscriptionId> {
        let id = self.active.take()?;
        debug!(?id, ?origin, "pointer release ended drag subscription");
        Some(id)
    }
}
