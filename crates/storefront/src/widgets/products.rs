//! Product carousel: clamped page-offset scrolling, no autoplay.

/// Product carousel state.
///
/// The offset is in discrete page units, clamped to
/// `[0, max(0, item_count - visible_count)]`. Rendering maps it to a
/// pixel translation of the scrollable track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCarousel {
    offset: usize,
    item_count: usize,
    visible_count: usize,
}

impl ProductCarousel {
    /// Create a carousel over `item_count` cards showing `visible_count`
    /// at a time.
    #[must_use]
    pub const fn new(item_count: usize, visible_count: usize) -> Self {
        Self {
            offset: 0,
            item_count,
            visible_count,
        }
    }

    /// Current page offset.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Largest reachable offset.
    #[must_use]
    pub const fn max_offset(&self) -> usize {
        self.item_count.saturating_sub(self.visible_count)
    }

    /// Scroll one card forward, clamped at the end.
    pub const fn next(&mut self) -> usize {
        if self.offset < self.max_offset() {
            self.offset += 1;
        }
        self.offset
    }

    /// Scroll one card back, clamped at zero.
    pub const fn prev(&mut self) -> usize {
        self.offset = self.offset.saturating_sub(1);
        self.offset
    }

    /// Pixel translation of the track for the current offset.
    #[must_use]
    pub const fn track_offset_px(&self, item_width_px: u32) -> u64 {
        self.offset as u64 * item_width_px as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_at_both_ends() {
        let mut carousel = ProductCarousel::new(8, 4);
        assert_eq!(carousel.max_offset(), 4);

        assert_eq!(carousel.prev(), 0);
        for _ in 0..10 {
            carousel.next();
        }
        assert_eq!(carousel.offset(), 4);
        assert_eq!(carousel.prev(), 3);
    }

    #[test]
    fn test_fewer_items_than_visible_never_scrolls() {
        let mut carousel = ProductCarousel::new(3, 4);
        assert_eq!(carousel.max_offset(), 0);
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.prev(), 0);
    }

    #[test]
    fn test_offset_stays_in_range_under_any_sequence() {
        let mut carousel = ProductCarousel::new(8, 4);
        let ops: [fn(&mut ProductCarousel) -> usize; 3] = [
            ProductCarousel::next,
            ProductCarousel::next,
            ProductCarousel::prev,
        ];
        for op in ops.iter().cycle().take(40) {
            let offset = op(&mut carousel);
            assert!(offset <= carousel.max_offset());
        }
    }

    #[test]
    fn test_track_offset_px() {
        let mut carousel = ProductCarousel::new(8, 4);
        carousel.next();
        carousel.next();
        // 280 px card + 32 px gap.
        assert_eq!(carousel.track_offset_px(312), 624);
    }
}
