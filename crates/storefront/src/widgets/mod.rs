//! Presentational widget controllers.
//!
//! Each controller is a small state machine over indices and flags; the
//! rendering collaborator maps the state to markup. Only the hero
//! carousel has an asynchronous element (autoplay).

pub mod autoplay;
pub mod hero;
pub mod products;
pub mod toggles;

pub use autoplay::Autoplay;
pub use hero::{HeroCarousel, Transition};
pub use products::ProductCarousel;
pub use toggles::{OverlayGroup, Panel};
