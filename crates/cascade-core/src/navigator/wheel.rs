//! Wheel/trackpad adapter.
//!
//! Turns a continuous stream of vertical delta events into zero or one
//! step transition per throttle window, while letting gestures fall
//! through to the active page's own scrolling whenever its inner
//! content overflows and the scroll position is away from a boundary.
//!
//! Check order: the overflow/boundary pass-through is evaluated before
//! the throttle and lock, so a user scrolling long inner content is
//! never trapped behind the debounce timers.

use std::time::{Duration, Instant};

use crate::page::Page;

use super::state::PageNavigator;

/// What the host should do with one wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDisposition {
    /// Hand the event to the active page's inner scrolling untouched.
    PassThrough,
    /// Swallow the event without navigating (throttled, locked, or a
    /// zero delta).
    Suppressed,
    /// Event consumed as navigation; the flag reports whether the step
    /// was accepted.
    Navigated(bool),
}

#[derive(Debug, Clone)]
pub struct WheelAdapter {
    throttle: Duration,
    boundary_tolerance: u32,
    last_transition: Option<Instant>,
}

impl WheelAdapter {
    pub fn new(throttle: Duration, boundary_tolerance: u32) -> Self {
        Self {
            throttle,
            boundary_tolerance,
            last_transition: None,
        }
    }

    /// Handle one wheel event with the given vertical delta (positive
    /// scrolls content up, i.e. toward the next page).
    pub fn handle<P: Page>(
        &mut self,
        navigator: &mut PageNavigator<P>,
        delta: i32,
    ) -> WheelDisposition {
        self.handle_at(navigator, delta, Instant::now())
    }

    pub fn handle_at<P: Page>(
        &mut self,
        navigator: &mut PageNavigator<P>,
        delta: i32,
        now: Instant,
    ) -> WheelDisposition {
        // Inner-content scrolling wins over navigation whenever there is
        // somewhere left to scroll. Missing metrics read as no overflow.
        if let Some(metrics) = navigator.active_page().metrics() {
            if metrics.has_overflow() && !metrics.at_boundary(self.boundary_tolerance) {
                return WheelDisposition::PassThrough;
            }
        }

        let throttled = self
            .last_transition
            .is_some_and(|last| now.duration_since(last) < self.throttle);
        if throttled || navigator.is_locked_at(now) {
            return WheelDisposition::Suppressed;
        }

        if delta == 0 {
            return WheelDisposition::Suppressed;
        }

        self.last_transition = Some(now);
        let accepted = if delta > 0 {
            navigator.advance_at(now)
        } else {
            navigator.retreat_at(now)
        };
        WheelDisposition::Navigated(accepted)
    }
}
