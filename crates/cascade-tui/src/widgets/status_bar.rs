use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};
use crate::theme::Theme;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        let mode_str = match &app.mode {
            Mode::Normal => "NORMAL".to_string(),
            Mode::JumpPrompt(buffer) => format!("JUMP :{}", buffer),
            Mode::Help => "HELP".to_string(),
        };

        let position = format!(
            "{}/{}",
            app.navigator.current_index() + 1,
            app.navigator.total_pages()
        );

        let status_text = if let Some(msg) = app.announcement() {
            format!(" {} | {} | {} | {}", mode_str, app.deck_title, position, msg)
        } else {
            format!(" {} | {} | {}", mode_str, app.deck_title, position)
        };

        let help_hint = " j/k:page g/G:ends ::jump ?:help q:quit ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.fg0).bg(theme.bg2),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(theme.bg2),
            ),
            Span::styled(
                help_hint,
                Style::default().fg(theme.grey2).bg(theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
