use cascade_core::navigator::Visibility;
use cascade_core::PageNavigator;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::page::ContentPage;
use crate::theme::Theme;

pub struct PagePanelWidget;

impl PagePanelWidget {
    /// Inner body geometry for a given panel area: borders take one
    /// cell per side, the peek strips one row each at top and bottom.
    pub fn body_size(area: Rect, show_peek: bool) -> (u16, u16) {
        let peek_rows = if show_peek { 2 } else { 0 };
        (
            area.width.saturating_sub(2),
            area.height.saturating_sub(2 + peek_rows),
        )
    }

    pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        let nav = &app.navigator;
        let current = nav.current_index();
        let page = nav.active_page();

        let title = format!(" {} ({}/{}) ", page.title, current + 1, nav.total_pages());
        let border_color = if page.is_focused() {
            theme.accent
        } else {
            theme.dim
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.bg0).fg(theme.fg0));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let show_peek = app.config.ui.show_peek;
        let mut lines: Vec<Line> = Vec::new();

        if show_peek {
            lines.push(peek_line('\u{2191}', neighbor(nav, Visibility::Previous), theme));
        }

        let (_, body_height) = Self::body_size(area, show_peek);
        let scroll = page.scroll() as usize;
        for wrapped in page
            .wrapped_lines()
            .iter()
            .skip(scroll)
            .take(body_height as usize)
        {
            lines.push(Line::from(Span::styled(
                wrapped.clone(),
                Style::default().fg(theme.fg1),
            )));
        }
        // Pad so the bottom peek stays pinned to the last row.
        let peek_offset = if show_peek { 1 } else { 0 };
        while lines.len() < peek_offset + body_height as usize {
            lines.push(Line::default());
        }

        if show_peek {
            lines.push(peek_line('\u{2193}', neighbor(nav, Visibility::Next), theme));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Look up the page the navigator currently projects into `which`.
fn neighbor(nav: &PageNavigator<ContentPage>, which: Visibility) -> Option<&ContentPage> {
    (0..nav.total_pages())
        .find(|&index| nav.visibility(index) == which)
        .and_then(|index| nav.page(index))
}

fn peek_line<'a>(arrow: char, neighbor: Option<&ContentPage>, theme: &Theme) -> Line<'a> {
    match neighbor {
        Some(page) => Line::from(Span::styled(
            format!("{} {}", arrow, page.title),
            Style::default()
                .fg(theme.dim)
                .add_modifier(Modifier::ITALIC),
        )),
        None => Line::default(),
    }
}
