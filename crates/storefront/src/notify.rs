//! Stacking user-facing notifications.
//!
//! Each notification auto-dismisses after a fixed interval or on explicit
//! user dismissal; multiple notifications may stack. Expiry is deadline
//! based: callers sweep the center with a timestamp (the demo binary does
//! this on its event ticks), which keeps the center synchronous and
//! testable without sleeping.
//!
//! The center is also a [`CartObserver`]: cart events map directly to the
//! user-facing confirmation messages.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracing::debug;

use saffron_core::NotificationId;

use crate::cart::{CartEvent, CartObserver};
use crate::sync::lock;
use crate::view::CartView;

/// Notification severity. Informational, not exceptional - there is no
/// user-visible error state beyond these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// A single stacked notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    expires_at: Instant,
}

#[derive(Debug)]
struct Inner {
    next_id: i64,
    active: Vec<Notification>,
}

/// Stacking notification center with auto-dismiss.
#[derive(Debug)]
pub struct NotificationCenter {
    ttl: Duration,
    inner: Mutex<Inner>,
}

impl NotificationCenter {
    /// Create a center whose notifications live for `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            inner: Mutex::new(Inner {
                next_id: 1,
                active: Vec::new(),
            }),
        }
    }

    /// Push a notification onto the stack.
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        let message = message.into();
        let mut inner = lock(&self.inner);
        let id = NotificationId::new(inner.next_id);
        inner.next_id += 1;
        debug!(%id, ?kind, %message, "notification");
        inner.active.push(Notification {
            id,
            message,
            kind,
            expires_at: Instant::now() + self.ttl,
        });
        id
    }

    /// Explicitly dismiss a notification. Returns whether it was present.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        let mut inner = lock(&self.inner);
        let before = inner.active.len();
        inner.active.retain(|n| n.id != id);
        inner.active.len() != before
    }

    /// Drop every notification whose deadline has passed at `now`,
    /// returning the dismissed ones in stack order.
    pub fn sweep(&self, now: Instant) -> Vec<Notification> {
        let mut inner = lock(&self.inner);
        let (expired, active): (Vec<_>, Vec<_>) = std::mem::take(&mut inner.active)
            .into_iter()
            .partition(|n| n.expires_at <= now);
        inner.active = active;
        expired
    }

    /// Snapshot of the current stack, oldest first.
    #[must_use]
    pub fn active(&self) -> Vec<Notification> {
        lock(&self.inner).active.clone()
    }
}

impl CartObserver for NotificationCenter {
    fn cart_changed(&self, event: &CartEvent, _view: &CartView) {
        match event {
            CartEvent::Added { name, .. } => {
                self.notify(format!("{name} added to cart"), NotificationKind::Success);
            }
            CartEvent::Removed { name, .. } => {
                self.notify(format!("{name} removed from cart"), NotificationKind::Info);
            }
            CartEvent::Cleared => {
                self.notify("Cart emptied", NotificationKind::Info);
            }
            // Quantity tweaks and hydration re-render silently.
            CartEvent::QuantityChanged { .. } | CartEvent::Hydrated => {}
        }
    }
}
