//! Full shopping sessions with the timer-driven pieces under a paused clock.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use saffron_core::ProductId;
use saffron_storefront::widgets::toggles::Panel;
use saffron_storefront::widgets::{Autoplay, HeroCarousel, Transition};
use saffron_storefront::{
    AppState, Catalog, CartView, CheckoutOutcome, MemoryStorage, NotificationKind, RenderSurface,
    StorefrontConfig,
};

/// Render surface that captures every snapshot it is handed.
#[derive(Default)]
struct CaptureSurface {
    views: Mutex<Vec<CartView>>,
}

impl RenderSurface for CaptureSurface {
    fn render_cart(&self, view: &CartView) {
        self.views.lock().expect("capture lock").push(view.clone());
    }
}

struct SharedSurface(Arc<CaptureSurface>);
impl RenderSurface for SharedSurface {
    fn render_cart(&self, view: &CartView) {
        self.0.render_cart(view);
    }
}

fn state_with_surface() -> (AppState, Arc<CaptureSurface>) {
    let surface = Arc::new(CaptureSurface::default());
    let state = AppState::new(
        StorefrontConfig::default(),
        Catalog::demo(),
        Box::new(MemoryStorage::new()),
        Box::new(SharedSurface(Arc::clone(&surface))),
    );
    (state, surface)
}

async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn checkout_session_renders_every_step() {
    let (state, surface) = state_with_surface();

    state.add_to_cart(ProductId::new(1), 1);
    state.add_to_cart(ProductId::new(5), 3);
    state.open_panel(Panel::CartDrawer);

    assert_eq!(state.checkout().await, CheckoutOutcome::Completed);
    assert!(!state.is_panel_open(Panel::CartDrawer));

    // Hydrated render + two adds + the clear.
    let views = surface.views.lock().expect("capture lock");
    assert_eq!(views.len(), 4);
    assert!(views[0].is_empty());
    assert_eq!(views[2].item_count, 4);
    assert!(views[3].is_empty());
}

#[tokio::test(start_paused = true)]
async fn notifications_expire_after_their_ttl() {
    let (state, _surface) = state_with_surface();
    state.add_to_cart(ProductId::new(4), 1);

    let ttl = state.config().notification_ttl;
    assert_eq!(state.notifications().active().len(), 1);

    // Well before the deadline nothing expires; past it, everything does.
    assert!(state
        .sweep_notifications(Instant::now() + ttl - Duration::from_secs(1))
        .is_empty());
    let expired = state.sweep_notifications(Instant::now() + ttl);
    assert_eq!(expired.len(), 1);
    assert_eq!(expired[0].kind, NotificationKind::Success);
    assert!(state.notifications().active().is_empty());
}

#[tokio::test(start_paused = true)]
async fn autoplay_drives_the_shared_hero_state() {
    let (state, _surface) = state_with_surface();
    let hero = state.hero().expect("hero configured");

    let transitions: Arc<Mutex<Vec<Transition>>> = Arc::default();
    let sink = Arc::clone(&transitions);
    let mut autoplay = Autoplay::new(
        Arc::clone(&hero),
        state.config().autoplay_interval,
        Arc::new(move |t| sink.lock().expect("sink lock").push(t)),
    );
    autoplay.start();
    settle().await;

    // One interval: automatic advance to slide 1.
    tokio::time::advance(state.config().autoplay_interval).await;
    settle().await;
    assert_eq!(hero.lock().expect("hero lock").current(), 1);

    // Manual prev just before the next tick restarts the timer.
    tokio::time::advance(state.config().autoplay_interval - Duration::from_millis(100)).await;
    settle().await;
    autoplay.interact(HeroCarousel::prev);
    settle().await;
    assert_eq!(hero.lock().expect("hero lock").current(), 0);

    // The old deadline passes without a tick; the fresh interval fires one.
    tokio::time::advance(Duration::from_millis(100)).await;
    settle().await;
    assert_eq!(hero.lock().expect("hero lock").current(), 0);

    tokio::time::advance(state.config().autoplay_interval).await;
    settle().await;
    assert_eq!(hero.lock().expect("hero lock").current(), 1);

    let seen = transitions.lock().expect("sink lock").clone();
    assert_eq!(
        seen,
        vec![
            Transition { from: 0, to: 1 },
            Transition { from: 1, to: 0 },
            Transition { from: 0, to: 1 },
        ]
    );
}
