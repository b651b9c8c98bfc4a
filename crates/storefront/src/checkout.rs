//! Simulated checkout flow.
//!
//! There is no payment backend: checkout acknowledges the cart, waits a
//! configurable simulated delay, then clears the cart and closes the cart
//! drawer. An empty cart is rejected up front with an error notification.

use crate::notify::NotificationKind;
use crate::state::AppState;
use crate::widgets::toggles::Panel;

/// How a checkout attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Nothing to check out; the user was told the cart is empty.
    EmptyCart,
    /// The simulated purchase completed and the cart was cleared.
    Completed,
}

impl AppState {
    /// Run the simulated checkout.
    ///
    /// On success this clears the cart (which itself emits the "cart
    /// emptied" notification and persists the empty sequence), closes the
    /// cart drawer, and thanks the user.
    pub async fn checkout(&self) -> CheckoutOutcome {
        if self.cart_count() == 0 {
            self.notifications()
                .notify("Your cart is empty", NotificationKind::Error);
            return CheckoutOutcome::EmptyCart;
        }

        self.notifications()
            .notify("Redirecting to payment...", NotificationKind::Info);
        tokio::time::sleep(self.config().checkout_delay).await;

        self.clear_cart();
        self.close_panel(Panel::CartDrawer);
        self.notifications()
            .notify("Thank you for your purchase!", NotificationKind::Success);
        CheckoutOutcome::Completed
    }
}
