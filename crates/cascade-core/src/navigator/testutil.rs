//! Shared fixtures for navigator tests.

use crate::page::{Page, ScrollMetrics};

pub(crate) struct TestPage {
    pub metrics: Option<ScrollMetrics>,
    pub focused: bool,
}

impl TestPage {
    /// A page whose content fits the viewport (no inner scrolling).
    pub fn plain() -> Self {
        Self {
            metrics: None,
            focused: false,
        }
    }

    /// A page with an overflowing inner region at the given offset.
    pub fn overflowing(offset: u32) -> Self {
        Self {
            metrics: Some(ScrollMetrics {
                offset,
                extent: 1000,
                viewport: 300,
            }),
            focused: false,
        }
    }
}

impl Page for TestPage {
    fn metrics(&self) -> Option<ScrollMetrics> {
        self.metrics
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}

pub(crate) fn deck(n: usize) -> Vec<TestPage> {
    (0..n).map(|_| TestPage::plain()).collect()
}
