//! Application state shared across UI callbacks.
//!
//! Every user interaction lands on one of these orchestration methods;
//! the subscription wiring (view binder + notification bridge onto the
//! cart store) happens once in [`AppState::new`], never per-render.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use saffron_core::{Price, ProductId};
use tracing::info;

use crate::cart::{CartObserver, CartStore};
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::notify::{Notification, NotificationCenter, NotificationKind};
use crate::storage::CartStorage;
use crate::sync::lock;
use crate::view::{CartView, RenderSurface, ViewBinder};
use crate::widgets::hero::HeroCarousel;
use crate::widgets::products::ProductCarousel;
use crate::widgets::toggles::{OverlayGroup, Panel};

/// The product carousel shows at most this many cards.
const CAROUSEL_PRODUCTS: usize = 8;

/// Application state shared across all UI callbacks.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: Mutex<CartStore>,
    notifications: Arc<NotificationCenter>,
    hero: Option<Arc<Mutex<HeroCarousel>>>,
    products: Mutex<ProductCarousel>,
    panels: Mutex<OverlayGroup>,
}

impl AppState {
    /// Wire up the storefront: hydrate the cart from `storage`, subscribe
    /// the view binder and the notification bridge, and push the initial
    /// render.
    #[must_use]
    pub fn new(
        config: StorefrontConfig,
        catalog: Catalog,
        storage: Box<dyn CartStorage>,
        surface: Box<dyn RenderSurface>,
    ) -> Self {
        let notifications = Arc::new(NotificationCenter::new(config.notification_ttl));

        let mut cart = CartStore::new(storage);
        cart.subscribe(Arc::new(ViewBinder::new(surface)));
        cart.subscribe(Arc::clone(&notifications) as Arc<dyn CartObserver>);
        cart.refresh();

        let hero = HeroCarousel::new(config.hero_slides).map(|h| Arc::new(Mutex::new(h)));
        let products = ProductCarousel::new(
            catalog.len().min(CAROUSEL_PRODUCTS),
            config.visible_products,
        );

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart: Mutex::new(cart),
                notifications,
                hero,
                products: Mutex::new(products),
                panels: Mutex::new(OverlayGroup::new()),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the notification center.
    #[must_use]
    pub fn notifications(&self) -> &NotificationCenter {
        &self.inner.notifications
    }

    /// Shared hero carousel state, if the page has hero slides.
    #[must_use]
    pub fn hero(&self) -> Option<Arc<Mutex<HeroCarousel>>> {
        self.inner.hero.as_ref().map(Arc::clone)
    }

    // =========================================================================
    // Cart callbacks
    // =========================================================================

    /// Add `quantity` of a product to the cart.
    pub fn add_to_cart(&self, id: ProductId, quantity: u32) {
        lock(&self.inner.cart).add(&self.inner.catalog, id, quantity);
    }

    /// Remove a product's line from the cart.
    pub fn remove_from_cart(&self, id: ProductId) {
        lock(&self.inner.cart).remove(id);
    }

    /// Replace a line's quantity (zero removes the line).
    pub fn set_cart_quantity(&self, id: ProductId, quantity: u32) {
        lock(&self.inner.cart).set_quantity(id, quantity);
    }

    /// Empty the cart.
    pub fn clear_cart(&self) {
        lock(&self.inner.cart).clear();
    }

    /// Current cart total.
    #[must_use]
    pub fn cart_total(&self) -> Price {
        lock(&self.inner.cart).total()
    }

    /// Current badge count (sum of quantities).
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        lock(&self.inner.cart).count()
    }

    /// Display snapshot of the current cart.
    #[must_use]
    pub fn cart_view(&self) -> CartView {
        CartView::from_lines(lock(&self.inner.cart).lines())
    }

    // =========================================================================
    // Widget callbacks
    // =========================================================================

    /// Scroll the product carousel forward; returns the new offset.
    pub fn product_next(&self) -> usize {
        lock(&self.inner.products).next()
    }

    /// Scroll the product carousel back; returns the new offset.
    pub fn product_prev(&self) -> usize {
        lock(&self.inner.products).prev()
    }

    /// Pixel translation of the product track at the current offset.
    #[must_use]
    pub fn product_track_offset_px(&self) -> u64 {
        lock(&self.inner.products).track_offset_px(self.inner.config.product_item_width)
    }

    /// Open a drawer/menu panel.
    pub fn open_panel(&self, panel: Panel) {
        lock(&self.inner.panels).open(panel);
    }

    /// Close a drawer/menu panel via its close control.
    pub fn close_panel(&self, panel: Panel) {
        lock(&self.inner.panels).close(panel);
    }

    /// Overlay click: close everything the overlay is backing.
    pub fn overlay_clicked(&self) -> Vec<Panel> {
        lock(&self.inner.panels).overlay_clicked()
    }

    /// Whether a panel is currently open.
    #[must_use]
    pub fn is_panel_open(&self, panel: Panel) -> bool {
        lock(&self.inner.panels).is_open(panel)
    }

    /// Whether the shared dimming overlay is visible.
    #[must_use]
    pub fn overlay_active(&self) -> bool {
        lock(&self.inner.panels).overlay_active()
    }

    /// Whether background page scroll is suspended.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        lock(&self.inner.panels).scroll_locked()
    }

    /// Drop expired notifications as of `now`.
    pub fn sweep_notifications(&self, now: Instant) -> Vec<Notification> {
        self.inner.notifications.sweep(now)
    }

    // =========================================================================
    // Stub interactions
    // =========================================================================

    /// Newsletter signup stub: acknowledge, store nothing.
    pub fn newsletter_signup(&self, email: &str) {
        info!(%email, "newsletter signup");
        self.inner.notifications.notify(
            "Thanks! Your email has been registered.",
            NotificationKind::Success,
        );
    }

    /// Search stub.
    pub fn search_requested(&self) {
        self.inner
            .notifications
            .notify("Search is coming soon", NotificationKind::Info);
    }

    /// Account entry stub.
    pub fn account_requested(&self) {
        self.inner
            .notifications
            .notify("Account sign-in is coming soon", NotificationKind::Info);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    struct NullSurface;
    impl RenderSurface for NullSurface {
        fn render_cart(&self, _view: &CartView) {}
    }

    fn state() -> AppState {
        AppState::new(
            StorefrontConfig::default(),
            Catalog::demo(),
            Box::new(MemoryStorage::new()),
            Box::new(NullSurface),
        )
    }

    #[test]
    fn test_cart_callbacks_flow_through_store() {
        let state = state();
        state.add_to_cart(ProductId::new(1), 1);
        state.add_to_cart(ProductId::new(1), 2);
        assert_eq!(state.cart_count(), 3);
        assert_eq!(state.cart_total().as_minor(), 75_000_000);

        state.remove_from_cart(ProductId::new(1));
        assert_eq!(state.cart_count(), 0);
        assert!(state.cart_view().is_empty());
    }

    #[test]
    fn test_add_produces_notification_naming_product() {
        let state = state();
        state.add_to_cart(ProductId::new(3), 1);
        let active = state.notifications().active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].message, "AirPods Pro added to cart");
        assert_eq!(active[0].kind, NotificationKind::Success);
    }

    #[test]
    fn test_panels_share_overlay() {
        let state = state();
        state.open_panel(Panel::CartDrawer);
        state.open_panel(Panel::MobileMenu);
        assert!(state.overlay_active());
        assert!(state.scroll_locked());

        let closed = state.overlay_clicked();
        assert_eq!(closed.len(), 2);
        assert!(!state.overlay_active());
    }

    #[test]
    fn test_product_carousel_respects_catalog_size() {
        let state = state();
        // 8 demo products, 4 visible: max offset 4.
        for _ in 0..10 {
            state.product_next();
        }
        assert_eq!(state.product_track_offset_px(), 4 * 312);
        assert_eq!(state.product_prev(), 3);
    }

    #[test]
    fn test_hero_present_with_default_config() {
        let state = state();
        let hero = state.hero().expect("hero slides configured");
        let transition = hero.lock().expect("hero lock").next();
        assert_eq!(transition.to, 1);
    }

    #[test]
    fn test_stubs_notify_only() {
        let state = state();
        state.newsletter_signup("user@example.com");
        state.search_requested();
        state.account_requested();

        let kinds: Vec<NotificationKind> = state
            .notifications()
            .active()
            .into_iter()
            .map(|n| n.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                NotificationKind::Success,
                NotificationKind::Info,
                NotificationKind::Info
            ]
        );
    }
}
