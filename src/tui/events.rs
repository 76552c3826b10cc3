//! Event handling for keyboard input

use crate::{FilterError, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Event handler for TUI input
pub struct EventHandler;

impl EventHandler {
    /// Create a new event handler
    pub fn new() -> Result<Self> {
        Ok(Self)
    }

    /// Poll for the next event with timeout
    pub fn next_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)
            .map_err(|e| FilterError::TuiError(format!("Event polling failed: {}", e)))?
        {
            let event = event::read()
                .map_err(|e| FilterError::TuiError(format!("Event reading failed: {}", e)))?;
            Ok(Some(event))
        } else {
            Ok(None)
        }
    }

    /// Handle a key event and return the action to take
    pub fn handle_key_event(&self, event: KeyEvent) -> KeyAction {
        // Windows reports releases too
        if event.kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        match event {
            KeyEvent {
                code: KeyCode::Esc, ..
            } => KeyAction::Quit,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => KeyAction::Quit,
            KeyEvent {
                code: KeyCode::Char('u'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => KeyAction::ClearInput,
            KeyEvent {
                code: KeyCode::Enter,
                ..
            } => KeyAction::Submit,
            KeyEvent {
                code: KeyCode::Up, ..
            } => KeyAction::ScrollUp,
            KeyEvent {
                code: KeyCode::Down,
                ..
            } => KeyAction::ScrollDown,
            KeyEvent {
                code: KeyCode::PageUp,
                ..
            } => KeyAction::PageUp,
            KeyEvent {
                code: KeyCode::PageDown,
                ..
            } => KeyAction::PageDown,
            KeyEvent {
                code: KeyCode::Char(c),
                modifiers,
                ..
            } if modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT => {
                KeyAction::InputChar(c)
            }
            KeyEvent {
                code: KeyCode::Backspace,
                ..
            } => KeyAction::DeleteChar,
            _ => KeyAction::None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum KeyAction {
    Quit,
    Submit,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ClearInput,
    InputChar(char),
    DeleteChar,
    None,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn test_handler() -> EventHandler {
        EventHandler::new().unwrap()
    }

    fn assert_key_action(key_code: KeyCode, modifiers: KeyModifiers, expected: KeyAction) {
        let handler = test_handler();
        let event = KeyEvent::new(key_code, modifiers);
        assert_eq!(handler.handle_key_event(event), expected);
    }

    #[test]
    fn test_key_mappings_data_driven() {
        let test_cases = [
            (KeyCode::Esc, KeyModifiers::NONE, KeyAction::Quit),
            (KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit),
            (
                KeyCode::Char('u'),
                KeyModifiers::CONTROL,
                KeyAction::ClearInput,
            ),
            (KeyCode::Enter, KeyModifiers::NONE, KeyAction::Submit),
            (KeyCode::Up, KeyModifiers::NONE, KeyAction::ScrollUp),
            (KeyCode::Down, KeyModifiers::NONE, KeyAction::ScrollDown),
            (KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PageUp),
            (KeyCode::PageDown, KeyModifiers::NONE, KeyAction::PageDown),
            (
                KeyCode::Backspace,
                KeyModifiers::NONE,
                KeyAction::DeleteChar,
            ),
            (
                KeyCode::Char('A'),
                KeyModifiers::SHIFT,
                KeyAction::InputChar('A'),
            ),
            (KeyCode::F(1), KeyModifiers::NONE, KeyAction::None),
            (KeyCode::Char('a'), KeyModifiers::ALT, KeyAction::None),
        ];

        for (key_code, modifiers, expected) in test_cases {
            assert_key_action(key_code, modifiers, expected);
        }

        let chars = ['a', 'Z', '1', '@', ' ', '-', '&'];
        for c in chars {
            assert_key_action(
                KeyCode::Char(c),
                KeyModifiers::NONE,
                KeyAction::InputChar(c),
            );
        }
    }

    #[test]
    fn test_key_release_is_ignored() {
        let handler = test_handler();
        let event = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(handler.handle_key_event(event), KeyAction::None);
    }

    #[test]
    fn test_key_action_debug_trait() {
        let cases = [
            (KeyAction::Quit, "Quit"),
            (KeyAction::Submit, "Submit"),
            (KeyAction::ClearInput, "ClearInput"),
            (KeyAction::DeleteChar, "DeleteChar"),
            (KeyAction::None, "None"),
        ];

        for (action, expected) in cases {
            assert_eq!(format!("{:?}", action), expected);
        }

        assert_eq!(format!("{:?}", KeyAction::InputChar('a')), "InputChar('a')");
    }
}
