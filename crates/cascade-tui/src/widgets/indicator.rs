//! Dot-column position indicator.
//!
//! One dot per page on the right edge, filled for the active page.
//! The column is display-only; direct navigation goes through the
//! digit keys and the jump prompt.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::Theme;

pub struct IndicatorWidget;

impl IndicatorWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        let total = app.navigator.total_pages();
        let current = app.navigator.current_index();

        // Center the column vertically; if the terminal is shorter than
        // the deck, the column is windowed around the active page.
        let visible = (area.height as usize).min(total);
        let first = if total <= visible {
            0
        } else {
            current
                .saturating_sub(visible / 2)
                .min(total - visible)
        };

        let top_pad = (area.height as usize).saturating_sub(visible) / 2;
        let mut lines: Vec<Line> = vec![Line::default(); top_pad];
        for index in first..first + visible {
            let (symbol, style) = if index == current {
                (
                    "\u{25cf}",
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("\u{25cb}", Style::default().fg(theme.dim))
            };
            lines.push(Line::from(Span::styled(format!(" {}", symbol), style)));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}
