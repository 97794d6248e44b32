//! Swipe/drag adapter.
//!
//! Interprets one start→end vertical drag as at most one step
//! transition. Unlike the wheel adapter there is no overflow or
//! boundary special-casing: a completed drag always means page
//! navigation at this level.

use crate::page::Page;

use super::state::PageNavigator;

#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: u32,
    start_y: Option<i32>,
}

impl SwipeTracker {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            start_y: None,
        }
    }

    /// Record the vertical position at gesture start.
    pub fn begin(&mut self, y: u16) {
        self.start_y = Some(i32::from(y));
    }

    /// Complete the gesture. Returns `true` when a step transition was
    /// accepted. Ignored entirely while the navigator is locked or when
    /// no start position was recorded.
    pub fn finish<P: Page>(&mut self, navigator: &mut PageNavigator<P>, y: u16) -> bool {
        let Some(start_y) = self.start_y.take() else {
            return false;
        };
        if navigator.is_locked() {
            return false;
        }

        // Dragging upward (start below end) pulls the next page in.
        let delta = start_y - i32::from(y);
        if delta.unsigned_abs() <= self.threshold {
            return false;
        }
        if delta > 0 {
            navigator.advance()
        } else {
            navigator.retreat()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::navigator::testutil::{deck, TestPage};

    fn nav(n: usize) -> PageNavigator<TestPage> {
        PageNavigator::new(deck(n), Duration::from_millis(0)).unwrap()
    }

    #[test]
    fn test_upward_swipe_advances_once() {
        let mut nav = nav(3);
        let mut swipe = SwipeTracker::new(3);
        swipe.begin(50);
        assert!(swipe.finish(&mut nav, 44));
        assert_eq!(nav.current_index(), 1);
        // Gesture consumed; a second finish without begin is ignored.
        assert!(!swipe.finish(&mut nav, 0));
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn test_downward_swipe_retreats() {
        let mut nav = nav(3);
        nav.jump_to(2);
        let mut swipe = SwipeTracker::new(3);
        swipe.begin(10);
        assert!(swipe.finish(&mut nav, 20));
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn test_short_drag_below_threshold_ignored() {
        let mut nav = nav(3);
        let mut swipe = SwipeTracker::new(3);
        swipe.begin(50);
        assert!(!swipe.finish(&mut nav, 48));
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_locked_navigator_ignores_gesture() {
        let mut nav =
            PageNavigator::new(deck(4), Duration::from_millis(600)).unwrap();
        assert!(nav.advance());
        let mut swipe = SwipeTracker::new(3);
        swipe.begin(50);
        assert!(!swipe.finish(&mut nav, 40));
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn test_finish_without_begin_is_noop() {
        let mut nav = nav(3);
        let mut swipe = SwipeTracker::new(3);
        assert!(!swipe.finish(&mut nav, 10));
        assert_eq!(nav.current_index(), 0);
    }
}
