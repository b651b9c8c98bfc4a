//! Drawer/menu visibility toggles sharing one overlay.
//!
//! Opening any panel activates the shared dimming overlay and suspends
//! background scroll; both are released only once no panel remains open.
//! Clicking the overlay closes every panel it is backing.

use std::collections::BTreeSet;

/// The panels backed by the shared overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Panel {
    MobileMenu,
    CartDrawer,
}

/// Open/closed state for all overlay-backed panels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayGroup {
    open: BTreeSet<Panel>,
}

impl OverlayGroup {
    /// Create a group with every panel closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a panel. Returns whether the state changed.
    pub fn open(&mut self, panel: Panel) -> bool {
        self.open.insert(panel)
    }

    /// Close a panel via its explicit close control. Returns whether the
    /// state changed.
    pub fn close(&mut self, panel: Panel) -> bool {
        self.open.remove(&panel)
    }

    /// Overlay click: close every open panel, returning them.
    pub fn overlay_clicked(&mut self) -> Vec<Panel> {
        let closed: Vec<Panel> = self.open.iter().copied().collect();
        self.open.clear();
        closed
    }

    /// Whether a specific panel is open.
    #[must_use]
    pub fn is_open(&self, panel: Panel) -> bool {
        self.open.contains(&panel)
    }

    /// Whether the shared dimming overlay is visible.
    #[must_use]
    pub fn overlay_active(&self) -> bool {
        !self.open.is_empty()
    }

    /// Whether background page scroll is suspended.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.overlay_active()
    }
}
