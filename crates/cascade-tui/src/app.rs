//! Application state: the navigator plus its input adapters, the UI
//! mode, and the announcement line fed by page-change notifications.

use std::cell::RefCell;
use std::rc::Rc;

use cascade_core::navigator::{SwipeTracker, WheelAdapter, WheelDisposition};
use cascade_core::{AppConfig, NavCommand, PageNavigator, Result};
use ratatui::layout::Rect;
use tracing::info;

use crate::deck::Deck;
use crate::input::Action;
use crate::page::ContentPage;
use crate::widgets::{self, PagePanelWidget};

/// Application mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Typing a page number; the buffer holds the digits so far.
    JumpPrompt(String),
    Help,
}

pub struct App {
    pub navigator: PageNavigator<ContentPage>,
    pub mode: Mode,
    pub deck_title: String,
    pub config: AppConfig,
    pub should_quit: bool,
    wheel: WheelAdapter,
    swipe: SwipeTracker,
    announcement: Rc<RefCell<Option<String>>>,
}

impl App {
    pub fn new(deck: Deck, config: AppConfig) -> Result<Self> {
        let mut navigator = PageNavigator::new(deck.pages, config.navigator.cooldown())?;

        // The announcement line stands in for an accessibility sink:
        // the observer formats the new position and logs it.
        let announcement: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&announcement);
        navigator.on_page_change(move |change| {
            let message = format!(
                "Page {} of {}",
                change.current_index + 1,
                change.total_pages
            );
            info!(index = change.current_index, "{}", message);
            *sink.borrow_mut() = Some(message);
        });

        let wheel = WheelAdapter::new(
            config.navigator.wheel_throttle(),
            config.navigator.boundary_tolerance,
        );
        let swipe = SwipeTracker::new(config.navigator.swipe_threshold);

        Ok(Self {
            navigator,
            mode: Mode::Normal,
            deck_title: deck.title,
            config,
            should_quit: false,
            wheel,
            swipe,
            announcement,
        })
    }

    pub fn total_pages(&self) -> usize {
        self.navigator.total_pages()
    }

    pub fn announcement(&self) -> Option<String> {
        self.announcement.borrow().clone()
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextPage => {
                self.navigator.apply(NavCommand::Advance);
            }
            Action::PrevPage => {
                self.navigator.apply(NavCommand::Retreat);
            }
            Action::FirstPage => {
                self.navigator.apply(NavCommand::First);
            }
            Action::LastPage => {
                self.navigator.apply(NavCommand::Last);
            }
            Action::JumpTo(index) => {
                self.navigator.apply(NavCommand::Jump(index));
            }
            Action::OpenJumpPrompt => self.mode = Mode::JumpPrompt(String::new()),
            Action::Help => self.mode = Mode::Help,
            Action::ExitMode | Action::Cancel => self.mode = Mode::Normal,
            Action::Confirm => self.confirm_jump_prompt(),
            Action::InputChar(c) => {
                if let Mode::JumpPrompt(buffer) = &mut self.mode {
                    buffer.push(c);
                }
            }
            Action::Backspace => {
                if let Mode::JumpPrompt(buffer) = &mut self.mode {
                    buffer.pop();
                }
            }
            Action::None => {}
        }
    }

    /// One wheel tick. Navigation events go to the wheel adapter; a
    /// pass-through scrolls the active page's inner content instead.
    pub fn handle_wheel(&mut self, delta: i32) {
        match self.wheel.handle(&mut self.navigator, delta) {
            WheelDisposition::PassThrough => {
                self.navigator.active_page_mut().scroll_by(delta);
            }
            WheelDisposition::Suppressed | WheelDisposition::Navigated(_) => {}
        }
    }

    pub fn handle_drag_start(&mut self, row: u16) {
        self.swipe.begin(row);
    }

    pub fn handle_drag_end(&mut self, row: u16) {
        self.swipe.finish(&mut self.navigator, row);
    }

    /// Re-wrap every page to the current panel geometry and refresh the
    /// visibility projection. Called before each draw and on resize.
    pub fn reflow(&mut self, area: Rect) {
        let layout = widgets::compute_layout(area, self.config.ui.show_indicator);
        let (width, height) = PagePanelWidget::body_size(layout.page, self.config.ui.show_peek);
        let current = self.navigator.current_index();
        for index in 0..self.navigator.total_pages() {
            if let Some(page) = self.navigator.page_mut(index) {
                page.reflow(width, height);
                // Only the active page holds input focus.
                if index != current {
                    page.blur();
                }
            }
        }
        self.navigator.refresh();
    }

    fn confirm_jump_prompt(&mut self) {
        if let Mode::JumpPrompt(buffer) = &self.mode {
            // Prompt input is 1-based; out-of-range numbers clamp like
            // any other direct jump.
            if let Ok(number) = buffer.parse::<usize>() {
                if number > 0 {
                    self.navigator.jump_to(number - 1);
                }
            }
        }
        self.mode = Mode::Normal;
    }
}
