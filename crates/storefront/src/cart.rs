//! Cart state management.
//!
//! [`CartStore`] exclusively owns the ordered line sequence. Every mutation
//! follows the same explicit sequence: mutate, emit a [`CartEvent`] with a
//! fresh [`CartView`] snapshot to the registered observers (UI refresh and
//! user notifications hang off that), then persist the full cart. Invalid
//! input - an ID missing from the catalog, an unknown line - is a silent
//! no-op: the store is driven by trusted UI events, never by untrusted
//! external input, so nothing here returns an error.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use saffron_core::{Price, ProductId};

use crate::catalog::{Catalog, Product};
use crate::storage::CartStorage;
use crate::view::CartView;

/// A (product, quantity) pairing with denormalized display data.
///
/// Display fields are captured from the catalog at add time so a line can
/// render without a catalog lookup. Field names double as the persisted
/// wire layout. Quantity is always at least 1: a line that would drop to
/// zero is removed instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(rename = "oldPrice", default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<Price>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub quantity: u32,
}

impl CartLine {
    /// Capture a product's display fields into a new line.
    #[must_use]
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            old_price: product.old_price,
            image: product.image.clone(),
            badge: product.badge.clone(),
            quantity,
        }
    }

    /// `price * quantity` for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// What just happened to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// A product was added (or its quantity incremented by an add).
    Added { id: ProductId, name: String },
    /// A line was deleted.
    Removed { id: ProductId, name: String },
    /// A line's quantity was replaced.
    QuantityChanged { id: ProductId, quantity: u32 },
    /// The whole cart was emptied.
    Cleared,
    /// The cart was hydrated from storage (or explicitly re-rendered).
    Hydrated,
}

/// Receives cart snapshots after each mutation.
///
/// Observers are registered once during setup; the view binder and the
/// notification bridge both live behind this trait, which replaces the
/// original storefront's inline handler wiring.
pub trait CartObserver: Send + Sync {
    fn cart_changed(&self, event: &CartEvent, view: &CartView);
}

/// Mutable ordered cart with explicit persistence.
pub struct CartStore {
    lines: Vec<CartLine>,
    storage: Box<dyn CartStorage>,
    observers: Vec<Arc<dyn CartObserver>>,
}

impl CartStore {
    /// Create a store hydrated from `storage`.
    ///
    /// A missing or corrupt slot yields an empty cart (the adapter already
    /// logged it). Hydrated lines are additionally sanitized so the store's
    /// invariants hold even against a hand-edited slot: duplicate IDs keep
    /// the first line, zero quantities are dropped.
    #[must_use]
    pub fn new(storage: Box<dyn CartStorage>) -> Self {
        let lines = sanitize(storage.load());
        Self {
            lines,
            storage,
            observers: Vec::new(),
        }
    }

    /// Register an observer. Call during setup, before the first mutation.
    pub fn subscribe(&mut self, observer: Arc<dyn CartObserver>) {
        self.observers.push(observer);
    }

    /// Push the current state to all observers without mutating anything.
    ///
    /// Called once after setup so hydrated carts render immediately.
    pub fn refresh(&self) {
        self.emit(&CartEvent::Hydrated);
    }

    /// Add `quantity` of a product to the cart.
    ///
    /// Unknown product IDs and zero quantities are silent no-ops. An
    /// existing line is incremented; otherwise a new line is appended with
    /// the product's display fields.
    pub fn add(&mut self, catalog: &Catalog, id: ProductId, quantity: u32) {
        let Some(product) = catalog.get(id) else {
            debug!(%id, "add ignored: product not in catalog");
            return;
        };
        if quantity == 0 {
            debug!(%id, "add ignored: zero quantity");
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.id == id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine::from_product(product, quantity));
        }

        self.emit(&CartEvent::Added {
            id,
            name: product.name.clone(),
        });
        self.persist();
    }

    /// Delete a line. Unknown IDs are a silent no-op.
    pub fn remove(&mut self, id: ProductId) {
        let Some(index) = self.lines.iter().position(|line| line.id == id) else {
            debug!(%id, "remove ignored: not in cart");
            return;
        };
        let line = self.lines.remove(index);

        self.emit(&CartEvent::Removed {
            id,
            name: line.name,
        });
        self.persist();
    }

    /// Replace a line's quantity.
    ///
    /// A quantity of zero delegates to [`remove`](Self::remove); unknown
    /// IDs are a silent no-op.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }
        let Some(line) = self.lines.iter_mut().find(|line| line.id == id) else {
            debug!(%id, "set_quantity ignored: not in cart");
            return;
        };
        line.quantity = quantity;

        self.emit(&CartEvent::QuantityChanged { id, quantity });
        self.persist();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.emit(&CartEvent::Cleared);
        self.persist();
    }

    /// Sum of `price * quantity` over all lines; zero for an empty cart.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of all quantities - the cart badge number, distinct from the
    /// number of lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }

    /// The current line sequence, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn emit(&self, event: &CartEvent) {
        let view = CartView::from_lines(&self.lines);
        for observer in &self.observers {
            observer.cart_changed(event, &view);
        }
    }

    fn persist(&self) {
        if let Err(error) = self.storage.save(&self.lines) {
            warn!(%error, "failed to persist cart");
        }
    }
}

/// Enforce store invariants on hydrated lines.
fn sanitize(lines: Vec<CartLine>) -> Vec<CartLine> {
    let mut seen = std::collections::BTreeSet::new();
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        if line.quantity == 0 {
            warn!(id = %line.id, "dropping persisted line with zero quantity");
            continue;
        }
        if !seen.insert(line.id) {
            warn!(id = %line.id, "dropping persisted line with duplicate id");
            continue;
        }
        out.push(line);
    }
    out
}
