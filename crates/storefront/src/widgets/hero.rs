//! Hero carousel: wrapping slide index with explicit transitions.

/// An atomic slide switch.
///
/// The renderer deactivates slide/indicator `from` and activates `to` in
/// one step, so the UI never shows zero or two active slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
}

/// Hero carousel state: a 0-based slide index wrapping modulo the slide
/// count. The slide set is static after initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroCarousel {
    current: usize,
    slide_count: usize,
}

impl HeroCarousel {
    /// Create a carousel over `slide_count` slides, starting at slide 0.
    ///
    /// Returns `None` when there are no slides; a slide-less page simply
    /// has no carousel.
    #[must_use]
    pub const fn new(slide_count: usize) -> Option<Self> {
        if slide_count == 0 {
            return None;
        }
        Some(Self {
            current: 0,
            slide_count,
        })
    }

    /// The active slide index.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Total number of slides.
    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Advance one slide, wrapping past the end.
    pub fn next(&mut self) -> Transition {
        self.go_to((self.current + 1) % self.slide_count)
    }

    /// Retreat one slide, wrapping past the start.
    pub fn prev(&mut self) -> Transition {
        self.go_to((self.current + self.slide_count - 1) % self.slide_count)
    }

    /// Jump directly to `index`.
    ///
    /// An out-of-range index is a caller bug (indicator wiring is static);
    /// it is debug-asserted and wrapped in release so the index invariant
    /// cannot be violated.
    pub fn go_to(&mut self, index: usize) -> Transition {
        debug_assert!(index < self.slide_count, "slide index out of range");
        let from = self.current;
        self.current = index % self.slide_count;
        Transition {
            from,
            to: self.current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_slides_has_no_carousel() {
        assert!(HeroCarousel::new(0).is_none());
    }

    #[test]
    fn test_next_wraps() {
        let mut hero = HeroCarousel::new(3).expect("slides");
        assert_eq!(hero.next(), Transition { from: 0, to: 1 });
        assert_eq!(hero.next(), Transition { from: 1, to: 2 });
        assert_eq!(hero.next(), Transition { from: 2, to: 0 });
    }

    #[test]
    fn test_prev_wraps() {
        let mut hero = HeroCarousel::new(3).expect("slides");
        assert_eq!(hero.prev(), Transition { from: 0, to: 2 });
        assert_eq!(hero.prev(), Transition { from: 2, to: 1 });
    }

    #[test]
    fn test_go_to_jumps() {
        let mut hero = HeroCarousel::new(4).expect("slides");
        assert_eq!(hero.go_to(2), Transition { from: 0, to: 2 });
        assert_eq!(hero.current(), 2);
    }

    #[test]
    fn test_index_stays_in_range_under_any_sequence() {
        let mut hero = HeroCarousel::new(3).expect("slides");
        let ops: [fn(&mut HeroCarousel) -> Transition; 5] = [
            HeroCarousel::next,
            HeroCarousel::prev,
            HeroCarousel::next,
            |h| h.go_to(1),
            HeroCarousel::prev,
        ];
        for (step, op) in ops.iter().cycle().take(50).enumerate() {
            let transition = op(&mut hero);
            assert!(transition.to < hero.slide_count(), "step {step}");
            assert_eq!(hero.current(), transition.to);
        }
    }

    #[test]
    fn test_single_slide_self_transitions() {
        let mut hero = HeroCarousel::new(1).expect("slides");
        assert_eq!(hero.next(), Transition { from: 0, to: 0 });
        assert_eq!(hero.prev(), Transition { from: 0, to: 0 });
    }
}
