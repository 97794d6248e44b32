use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Option<AppEvent>> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    // (crossterm 0.27+ sends release events on some systems)
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => Ok(translate_mouse(mouse)),
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

fn translate_mouse(mouse: MouseEvent) -> Option<AppEvent> {
    match mouse.kind {
        MouseEventKind::ScrollDown => Some(AppEvent::Wheel(1)),
        MouseEventKind::ScrollUp => Some(AppEvent::Wheel(-1)),
        MouseEventKind::Down(MouseButton::Left) => Some(AppEvent::DragStart(mouse.row)),
        MouseEventKind::Up(MouseButton::Left) => Some(AppEvent::DragEnd(mouse.row)),
        _ => None,
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Wheel tick; positive scrolls toward the next page
    Wheel(i32),
    /// Left button pressed at this row (potential swipe start)
    DragStart(u16),
    /// Left button released at this row (swipe end)
    DragEnd(u16),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}
