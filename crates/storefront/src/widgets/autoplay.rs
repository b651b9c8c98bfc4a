//! Timer-driven autoplay for the hero carousel.
//!
//! A background tokio task advances the carousel once per interval. Any
//! manual navigation goes through [`Autoplay::interact`], which applies
//! the navigation and then restarts the timer so the user always gets a
//! full fresh interval before the next automatic tick. Restarting aborts
//! the previous task first; there is never more than one ticking timer.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::sync::lock;
use crate::widgets::hero::{HeroCarousel, Transition};

/// Callback invoked with every slide transition, automatic or manual.
pub type TransitionHook = Arc<dyn Fn(Transition) + Send + Sync>;

/// Owns the autoplay timer for a shared [`HeroCarousel`].
pub struct Autoplay {
    carousel: Arc<Mutex<HeroCarousel>>,
    interval: Duration,
    on_transition: TransitionHook,
    task: Option<JoinHandle<()>>,
}

impl Autoplay {
    /// Create a stopped autoplay driver.
    #[must_use]
    pub const fn new(
        carousel: Arc<Mutex<HeroCarousel>>,
        interval: Duration,
        on_transition: TransitionHook,
    ) -> Self {
        Self {
            carousel,
            interval,
            on_transition,
            task: None,
        }
    }

    /// Start (or restart) the timer. Must be called inside a tokio runtime.
    pub fn start(&mut self) {
        self.stop();
        let carousel = Arc::clone(&self.carousel);
        let on_transition = Arc::clone(&self.on_transition);
        let interval = self.interval;
        self.task = Some(tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                let transition = lock(&carousel).next();
                debug!(from = transition.from, to = transition.to, "autoplay tick");
                on_transition(transition);
            }
        }));
    }

    /// Tear the timer down.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Whether the timer is currently ticking.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Apply a manual navigation and restart the timer.
    ///
    /// `nav` runs under the carousel lock; the resulting transition is
    /// reported through the hook exactly like an automatic tick.
    pub fn interact(&mut self, nav: impl FnOnce(&mut HeroCarousel) -> Transition) -> Transition {
        let transition = nav(&mut lock(&self.carousel));
        (self.on_transition)(transition);
        if self.is_running() {
            self.start();
        }
        transition
    }

    /// Shared handle to the carousel state.
    #[must_use]
    pub fn carousel(&self) -> Arc<Mutex<HeroCarousel>> {
        Arc::clone(&self.carousel)
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(5_000);

    fn autoplay() -> (Autoplay, Arc<Mutex<Vec<Transition>>>) {
        let carousel = Arc::new(Mutex::new(HeroCarousel::new(3).expect("slides")));
        let seen: Arc<Mutex<Vec<Transition>>> = Arc::default();
        let sink = Arc::clone(&seen);
        let hook: TransitionHook = Arc::new(move |t| sink.lock().expect("hook lock").push(t));
        (Autoplay::new(carousel, INTERVAL, hook), seen)
    }

    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_autoplay_advances_every_interval() {
        let (mut autoplay, seen) = autoplay();
        autoplay.start();
        settle().await;

        tokio::time::advance(INTERVAL).await;
        settle().await;
        tokio::time::advance(INTERVAL).await;
        settle().await;

        let seen = seen.lock().expect("seen lock").clone();
        assert_eq!(
            seen,
            vec![Transition { from: 0, to: 1 }, Transition { from: 1, to: 2 }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_interact_buys_a_fresh_interval() {
        let (mut autoplay, seen) = autoplay();
        autoplay.start();
        settle().await;

        // 4 s in, the user clicks "next" manually.
        tokio::time::advance(Duration::from_millis(4_000)).await;
        settle().await;
        autoplay.interact(HeroCarousel::next);
        settle().await;

        // 4 s later the original timer would have fired; the restarted one
        // must not have.
        tokio::time::advance(Duration::from_millis(4_000)).await;
        settle().await;
        assert_eq!(
            seen.lock().expect("seen lock").as_slice(),
            &[Transition { from: 0, to: 1 }]
        );

        // The full fresh interval elapses: one automatic tick.
        tokio::time::advance(Duration::from_millis(1_000)).await;
        settle().await;
        assert_eq!(
            seen.lock().expect("seen lock").as_slice(),
            &[Transition { from: 0, to: 1 }, Transition { from: 1, to: 2 }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_never_duplicates_ticks() {
        let (mut autoplay, seen) = autoplay();
        autoplay.start();
        settle().await;
        autoplay.start();
        settle().await;

        tokio::time::advance(INTERVAL).await;
        settle().await;
        assert_eq!(seen.lock().expect("seen lock").len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_tears_the_timer_down() {
        let (mut autoplay, seen) = autoplay();
        autoplay.start();
        settle().await;
        autoplay.stop();
        assert!(!autoplay.is_running());

        tokio::time::advance(INTERVAL).await;
        settle().await;
        assert!(seen.lock().expect("seen lock").is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_interact_while_stopped_stays_stopped() {
        let (mut autoplay, seen) = autoplay();
        autoplay.interact(HeroCarousel::next);
        assert!(!autoplay.is_running());
        assert_eq!(
            seen.lock().expect("seen lock").as_slice(),
            &[Transition { from: 0, to: 1 }]
        );
    }
}
