use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;

const BINDINGS: &[(&str, &str)] = &[
    ("Down / PgDn / Space / j", "next page"),
    ("Up / PgUp / k", "previous page"),
    ("Home / g", "first page"),
    ("End / G", "last page"),
    ("1-9", "jump to page"),
    (":", "jump prompt"),
    ("wheel / drag", "scroll or change page"),
    ("?", "this help"),
    ("q / Ctrl-C", "quit"),
];

pub struct HelpWidget;

impl HelpWidget {
    /// Render the key binding popup over the current frame. Any key
    /// dismisses it.
    pub fn render(frame: &mut Frame, theme: &Theme) {
        let area = frame.area();

        let popup_width = 44u16.min(area.width.saturating_sub(4));
        let popup_height = (BINDINGS.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let key_width = BINDINGS
            .iter()
            .map(|(keys, _)| keys.len())
            .max()
            .unwrap_or(0);

        let mut lines: Vec<Line> = vec![Line::default()];
        for (keys, action) in BINDINGS {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {:>width$}  ", keys, width = key_width),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, Style::default().fg(theme.fg0)),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
