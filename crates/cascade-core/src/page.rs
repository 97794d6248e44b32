//! Page abstraction consumed by the navigator.
//!
//! A page is one full-viewport unit of content in the linear deck. The
//! navigator never owns the page's inner scroll state; it queries live
//! metrics at decision time and otherwise treats pages as opaque handles.

/// Live scroll metrics for a page's inner content region.
///
/// All values are in whatever unit the rendering surface uses (terminal
/// rows here, pixels in a GUI). The navigator only compares them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMetrics {
    /// Current scroll position of the inner content.
    pub offset: u32,
    /// Total height of the inner content.
    pub extent: u32,
    /// Height of the visible window onto the inner content.
    pub viewport: u32,
}

impl ScrollMetrics {
    /// Whether the inner content is taller than its window.
    #[inline]
    pub fn has_overflow(&self) -> bool {
        self.extent > self.viewport
    }

    /// Whether the inner scroll position sits at the top or bottom
    /// extreme, within `tolerance` units.
    pub fn at_boundary(&self, tolerance: u32) -> bool {
        let at_top = self.offset <= tolerance;
        let at_bottom = self.offset + self.viewport + tolerance >= self.extent;
        at_top || at_bottom
    }
}

/// A unit of content in the navigable sequence.
///
/// Implementors expose live metrics for overflow/boundary checks and a
/// focus primitive invoked when the page becomes active. A page with no
/// inner scrollable region returns `None` from `metrics()`, which the
/// navigator reads as "no overflow".
pub trait Page {
    /// Query the inner content region, fresh on every call.
    fn metrics(&self) -> Option<ScrollMetrics>;

    /// Receive input focus. Called on every activation.
    fn focus(&mut self) {}
}
