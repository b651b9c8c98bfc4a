//! Cart display models and the view binder.
//!
//! The view binder is a [`CartObserver`]: the store hands it a fresh
//! [`CartView`] after every mutation and it forwards the snapshot to a
//! [`RenderSurface`], the collaborator that owns all markup and DOM
//! concerns. Nothing here re-reads store internals.

use saffron_core::ProductId;

use crate::cart::{CartEvent, CartLine, CartObserver};

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub id: ProductId,
    pub name: String,
    /// Unit price, formatted with digit grouping.
    pub price: String,
    /// Pre-discount unit price, when the line carries a discount.
    pub old_price: Option<String>,
    /// `price * quantity`, formatted.
    pub line_total: String,
    pub quantity: u32,
    pub image: String,
    pub badge: Option<String>,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id,
            name: line.name.clone(),
            price: line.price.to_string(),
            old_price: line.old_price.map(|p| p.to_string()),
            line_total: line.line_total().to_string(),
            quantity: line.quantity,
            image: line.image.clone(),
            badge: line.badge.clone(),
        }
    }
}

/// Cart display data: everything a renderer needs for the drawer and the
/// header badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    /// Formatted cart total.
    pub subtotal: String,
    /// Sum of quantities, for the badge. The badge hides at zero.
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_lines(&[])
    }

    /// Project a line sequence into display form.
    #[must_use]
    pub fn from_lines(lines: &[CartLine]) -> Self {
        let subtotal: saffron_core::Price = lines.iter().map(CartLine::line_total).sum();
        Self {
            lines: lines.iter().map(CartLineView::from).collect(),
            subtotal: subtotal.to_string(),
            item_count: lines
                .iter()
                .fold(0u32, |acc, line| acc.saturating_add(line.quantity)),
        }
    }

    /// Whether the empty-cart placeholder should render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The rendering collaborator. Owns markup entirely; this crate only hands
/// it snapshots.
pub trait RenderSurface: Send + Sync {
    fn render_cart(&self, view: &CartView);
}

/// Binds cart state to a render surface.
pub struct ViewBinder {
    surface: Box<dyn RenderSurface>,
}

impl ViewBinder {
    /// Wrap a render surface.
    #[must_use]
    pub fn new(surface: Box<dyn RenderSurface>) -> Self {
        Self { surface }
    }
}

impl CartObserver for ViewBinder {
    fn cart_changed(&self, _event: &CartEvent, view: &CartView) {
        self.surface.render_cart(view);
    }
}
