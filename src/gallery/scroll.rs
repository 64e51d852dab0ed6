use std::time::{Duration, Instant};

use crate::page::{Page, ScrollBehavior};

/// Section navigation plus the "past threshold" signal behind the Top button.
pub struct ScrollController {
    threshold_px: u32,
    smooth: Duration,
    past_threshold: bool,
}

impl ScrollController {
    pub fn new(threshold_px: u32, smooth: Duration) -> Self {
        Self {
            threshold_px,
            smooth,
            past_threshold: false,
        }
    }

    pub fn past_threshold(&self) -> bool {
        self.past_threshold
    }

    /// Re-reads the scroll offset. Returns whether the signal flipped.
    pub fn observe(&mut self, page: &Page) -> bool {
        let past = page.scroll_y_px() > self.threshold_px;
        let changed = past != self.past_threshold;
        self.past_threshold = past;
        changed
    }

    /// Scrolls the anchor to the top of the viewport. Returns `false` without
    /// touching the page when no such anchor is laid out.
    pub fn scroll_to_section(&self, page: &mut Page, section_id: &str, now: Instant) -> bool {
        let Some(offset) = page.element_offset(section_id) else {
            tracing::debug!(section = section_id, "no anchor for section, ignoring");
            return false;
        };

        tracing::debug!(section = section_id, offset, "scrolling to section");
        page.scroll_to(offset, ScrollBehavior::Smooth(self.smooth), now);
        true
    }

    pub fn scroll_to_top(&self, page: &mut Page, now: Instant) {
        page.scroll_to(0, ScrollBehavior::Smooth(self.smooth), now);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn laid_out_page() -> Page {
        let mut page = Page::new(16);
        let anchors = HashMap::from([("web-apps".to_string(), 30)]);
        page.set_layout(anchors, 200, 20);
        page
    }

    #[test]
    fn test_threshold_is_strictly_greater() {
        let mut page = laid_out_page();
        let mut scroll = ScrollController::new(400, Duration::ZERO);

        // 25 rows * 16 px == 400 px, not past.
        page.scroll_to(25, ScrollBehavior::Instant, Instant::now());
        scroll.observe(&page);
        assert!(!scroll.past_threshold());

        page.scroll_to(26, ScrollBehavior::Instant, Instant::now());
        assert!(scroll.observe(&page));
        assert!(scroll.past_threshold());

        page.scroll_to(0, ScrollBehavior::Instant, Instant::now());
        assert!(scroll.observe(&page));
        assert!(!scroll.past_threshold());
    }

    #[test]
    fn test_missing_section_is_silent_noop() {
        let mut page = laid_out_page();
        let scroll = ScrollController::new(400, Duration::from_millis(240));
        page.scroll_to(12, ScrollBehavior::Instant, Instant::now());

        assert!(!scroll.scroll_to_section(&mut page, "nonexistent-id", Instant::now()));
        assert_eq!(page.scroll_y(), 12);
        assert!(!page.is_animating());
    }

    #[test]
    fn test_scroll_to_section_and_back_to_top() {
        let mut page = laid_out_page();
        let scroll = ScrollController::new(400, Duration::from_millis(240));
        let start = Instant::now();

        assert!(scroll.scroll_to_section(&mut page, "web-apps", start));
        page.tick(start + Duration::from_millis(240));
        assert_eq!(page.scroll_y(), 30);

        let later = start + Duration::from_secs(1);
        scroll.scroll_to_top(&mut page, later);
        page.tick(later + Duration::from_millis(240));
        assert_eq!(page.scroll_y(), 0);
    }

    #[test]
    fn test_scroll_to_top_at_top_is_harmless() {
        let mut page = laid_out_page();
        let scroll = ScrollController::new(400, Duration::from_millis(240));
        scroll.scroll_to_top(&mut page, Instant::now());
        assert_eq!(page.scroll_y(), 0);
        assert!(!page.is_animating());
    }
}
