use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    JumpTo(usize),
    OpenJumpPrompt,
    Help,
    ExitMode,
    Confirm,
    Cancel,
    InputChar(char),
    Backspace,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    // Keys typed into the jump prompt never reach navigation.
    match &app.mode {
        Mode::JumpPrompt(_) => return handle_prompt_mode(key),
        Mode::Help => {
            // Any key exits help
            return Action::ExitMode;
        }
        Mode::Normal => {}
    }

    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Step navigation
        (KeyCode::Down, KeyModifiers::NONE)
        | (KeyCode::PageDown, KeyModifiers::NONE)
        | (KeyCode::Char(' '), KeyModifiers::NONE)
        | (KeyCode::Char('j'), KeyModifiers::NONE) => Action::NextPage,
        (KeyCode::Up, KeyModifiers::NONE)
        | (KeyCode::PageUp, KeyModifiers::NONE)
        | (KeyCode::Char('k'), KeyModifiers::NONE) => Action::PrevPage,

        // Jump to ends
        (KeyCode::Home, KeyModifiers::NONE) | (KeyCode::Char('g'), KeyModifiers::NONE) => {
            Action::FirstPage
        }
        (KeyCode::End, KeyModifiers::NONE) | (KeyCode::Char('G'), KeyModifiers::SHIFT) => {
            Action::LastPage
        }

        // Digit keys address pages directly; digits past the end of the
        // deck stay unmapped rather than clamping.
        (KeyCode::Char(c), KeyModifiers::NONE) if c.is_ascii_digit() && c != '0' => {
            let index = (c as usize) - ('1' as usize);
            if index < app.total_pages() {
                Action::JumpTo(index)
            } else {
                Action::None
            }
        }

        (KeyCode::Char(':'), KeyModifiers::NONE) => Action::OpenJumpPrompt,
        (KeyCode::Char('?'), KeyModifiers::SHIFT) | (KeyCode::Char('?'), KeyModifiers::NONE) => {
            Action::Help
        }

        _ => Action::None,
    }
}

/// Handle key events in the jump prompt
fn handle_prompt_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::Confirm,
        KeyCode::Esc => Action::Cancel,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Char(c) if c.is_ascii_digit() => Action::InputChar(c),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::deck::Deck;
    use crate::page::ContentPage;
    use cascade_core::AppConfig;

    fn app(pages: usize) -> App {
        let deck = Deck {
            title: "test".to_string(),
            pages: (0..pages)
                .map(|i| ContentPage::new(format!("p{}", i), "body"))
                .collect(),
        };
        App::new(deck, AppConfig::default()).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_step_keys() {
        let app = app(3);
        assert_eq!(handle_key_event(key(KeyCode::Down), &app), Action::NextPage);
        assert_eq!(handle_key_event(key(KeyCode::PageDown), &app), Action::NextPage);
        assert_eq!(handle_key_event(key(KeyCode::Char(' ')), &app), Action::NextPage);
        assert_eq!(handle_key_event(key(KeyCode::Up), &app), Action::PrevPage);
        assert_eq!(handle_key_event(key(KeyCode::PageUp), &app), Action::PrevPage);
    }

    #[test]
    fn test_digit_keys_bounded_by_deck() {
        let app = app(3);
        assert_eq!(handle_key_event(key(KeyCode::Char('1')), &app), Action::JumpTo(0));
        assert_eq!(handle_key_event(key(KeyCode::Char('3')), &app), Action::JumpTo(2));
        assert_eq!(handle_key_event(key(KeyCode::Char('4')), &app), Action::None);
    }

    #[test]
    fn test_prompt_mode_captures_keys() {
        let mut app = app(3);
        app.mode = Mode::JumpPrompt(String::new());
        assert_eq!(handle_key_event(key(KeyCode::Char('2')), &app), Action::InputChar('2'));
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &app), Action::None);
        assert_eq!(handle_key_event(key(KeyCode::Enter), &app), Action::Confirm);
        assert_eq!(handle_key_event(key(KeyCode::Esc), &app), Action::Cancel);
    }

    #[test]
    fn test_help_mode_exits_on_any_key() {
        let mut app = app(3);
        app.mode = Mode::Help;
        assert_eq!(handle_key_event(key(KeyCode::Char('x')), &app), Action::ExitMode);
    }
}
