pub mod help;
pub mod indicator;
pub mod page_panel;
pub mod status_bar;

pub use help::HelpWidget;
pub use indicator::IndicatorWidget;
pub use page_panel::PagePanelWidget;
pub use status_bar::StatusBarWidget;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions: the page panel, the optional indicator column, and
/// the status bar.
pub struct ScreenLayout {
    pub page: Rect,
    pub indicator: Option<Rect>,
    pub status: Rect,
}

pub fn compute_layout(area: Rect, show_indicator: bool) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    if show_indicator {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(rows[0]);
        ScreenLayout {
            page: cols[0],
            indicator: Some(cols[1]),
            status: rows[1],
        }
    } else {
        ScreenLayout {
            page: rows[0],
            indicator: None,
            status: rows[1],
        }
    }
}
