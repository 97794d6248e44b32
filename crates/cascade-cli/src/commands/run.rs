use std::io;
use std::path::Path;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};

use cascade_core::AppConfig;
use cascade_tui::{
    app::{App, Mode},
    deck,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets::{
        compute_layout, HelpWidget, IndicatorWidget, PagePanelWidget, StatusBarWidget,
    },
    Theme,
};

pub fn run(config: AppConfig, deck_path: Option<&Path>) -> Result<()> {
    let deck = deck::load(deck_path)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Cascade")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = Theme::default();
    let event_handler = EventHandler::new(config.ui.tick_rate_ms);
    let mut app = App::new(deck, config)?;
    tracing::debug!(pages = app.total_pages(), "viewer started");

    let result = event_loop(&mut terminal, &mut app, &event_handler, &theme);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
    theme: &Theme,
) -> Result<()> {
    loop {
        let size = terminal.size()?;
        let area = ratatui::layout::Rect::new(0, 0, size.width, size.height);
        app.reflow(area);

        terminal.draw(|frame| {
            let layout = compute_layout(frame.area(), app.config.ui.show_indicator);
            PagePanelWidget::render(frame, layout.page, app, theme);
            if let Some(indicator_area) = layout.indicator {
                IndicatorWidget::render(frame, indicator_area, app, theme);
            }
            StatusBarWidget::render(frame, layout.status, app, theme);
            if app.mode == Mode::Help {
                HelpWidget::render(frame, theme);
            }
        })?;

        match event_handler.next()? {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, app);
                app.handle_action(action);
            }
            Some(AppEvent::Wheel(delta)) => app.handle_wheel(delta),
            Some(AppEvent::DragStart(row)) => app.handle_drag_start(row),
            Some(AppEvent::DragEnd(row)) => app.handle_drag_end(row),
            Some(AppEvent::Resize(width, height)) => {
                app.reflow(ratatui::layout::Rect::new(0, 0, width, height));
            }
            Some(AppEvent::Tick) | None => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
