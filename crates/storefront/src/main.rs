//! Saffron Storefront - headless demo session.
//!
//! Runs the storefront state machine without a page attached: hydrates the
//! cart from the configured slot, wires a logging render surface in place
//! of real markup, starts hero autoplay, and walks through a scripted
//! shopping session. Useful for exercising the crate end to end and for
//! watching the event flow in the logs.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;
use std::time::Instant;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use saffron_core::ProductId;
use saffron_storefront::widgets::{Autoplay, HeroCarousel, Panel};
use saffron_storefront::{
    AppState, Catalog, CartView, JsonFileStorage, RenderSurface, StorefrontConfig,
};

/// Render surface that logs snapshots instead of producing markup.
struct LogSurface;

impl RenderSurface for LogSurface {
    fn render_cart(&self, view: &CartView) {
        info!(
            lines = view.lines.len(),
            items = view.item_count,
            subtotal = %view.subtotal,
            "cart rendered"
        );
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing with EnvFilter.
    // Defaults to info level for our crates if RUST_LOG is not set.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "saffron_storefront=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_json_file(path).expect("Failed to load catalog"),
        None => Catalog::demo(),
    };
    info!(products = catalog.len(), "catalog loaded");

    let storage = JsonFileStorage::new(config.cart_path.clone());
    let state = AppState::new(config, catalog, Box::new(storage), Box::new(LogSurface));

    // Hero autoplay, ticking for the duration of the session.
    let mut autoplay = state.hero().map(|carousel| {
        let mut autoplay = Autoplay::new(
            carousel,
            state.config().autoplay_interval,
            Arc::new(|t| info!(from = t.from, to = t.to, "hero slide")),
        );
        autoplay.start();
        autoplay
    });

    run_session(&state, autoplay.as_mut()).await;

    if let Some(autoplay) = &mut autoplay {
        autoplay.stop();
    }
    info!("session complete");
}

/// A scripted shopping session.
async fn run_session(state: &AppState, autoplay: Option<&mut Autoplay>) {
    // Browse the product carousel.
    state.product_next();
    state.product_next();
    info!(track_px = state.product_track_offset_px(), "product carousel scrolled");

    // Manual hero navigation cancels and restarts the autoplay timer.
    if let Some(autoplay) = autoplay {
        autoplay.interact(HeroCarousel::next);
    }

    // Fill the cart.
    state.add_to_cart(ProductId::new(1), 1);
    state.add_to_cart(ProductId::new(3), 2);
    state.add_to_cart(ProductId::new(1), 1);
    state.set_cart_quantity(ProductId::new(3), 1);

    // Unknown id: silent no-op.
    state.add_to_cart(ProductId::new(999), 1);

    // Inspect the drawer.
    state.open_panel(Panel::CartDrawer);
    info!(
        overlay = state.overlay_active(),
        scroll_locked = state.scroll_locked(),
        total = %state.cart_total(),
        count = state.cart_count(),
        "cart drawer open"
    );

    // Stub interactions.
    state.newsletter_signup("user@example.com");
    state.search_requested();

    // Pay (simulated): clears the cart and closes the drawer.
    let outcome = state.checkout().await;
    info!(?outcome, "checkout finished");

    for notification in state.sweep_notifications(Instant::now() + state.config().notification_ttl)
    {
        info!(kind = ?notification.kind, message = %notification.message, "notification dismissed");
    }
}
