//! Per-page display state as a pure projection of the cursor.
//!
//! There is no state machine per page. Every transition recomputes all
//! slots from the single cursor index; nothing is patched incrementally,
//! so the projection can never drift from the cursor.

/// Display state of one page relative to the active cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// The page under the cursor.
    Active,
    /// Immediately before the cursor.
    Previous,
    /// Immediately after the cursor.
    Next,
    /// Everything else.
    Hidden,
}

/// Project the display state of page `index` given the cursor.
#[inline]
pub fn project(index: usize, current: usize) -> Visibility {
    if index == current {
        Visibility::Active
    } else if index + 1 == current {
        Visibility::Previous
    } else if index == current + 1 {
        Visibility::Next
    } else {
        Visibility::Hidden
    }
}

/// Project all pages at once.
pub fn project_all(total: usize, current: usize) -> Vec<Visibility> {
    (0..total).map(|i| project(i, current)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_around_cursor() {
        assert_eq!(project(2, 2), Visibility::Active);
        assert_eq!(project(1, 2), Visibility::Previous);
        assert_eq!(project(3, 2), Visibility::Next);
        assert_eq!(project(0, 2), Visibility::Hidden);
        assert_eq!(project(4, 2), Visibility::Hidden);
    }

    #[test]
    fn test_no_previous_at_first_page() {
        let vis = project_all(3, 0);
        assert_eq!(vis, vec![Visibility::Active, Visibility::Next, Visibility::Hidden]);
    }

    #[test]
    fn test_no_next_at_last_page() {
        let vis = project_all(3, 2);
        assert_eq!(vis, vec![Visibility::Hidden, Visibility::Previous, Visibility::Active]);
    }

    #[test]
    fn test_exactly_one_active() {
        for total in 1..6 {
            for current in 0..total {
                let vis = project_all(total, current);
                let active = vis.iter().filter(|v| **v == Visibility::Active).count();
                let previous = vis.iter().filter(|v| **v == Visibility::Previous).count();
                let next = vis.iter().filter(|v| **v == Visibility::Next).count();
                assert_eq!(active, 1);
                assert!(previous <= 1);
                assert!(next <= 1);
            }
        }
    }
}
