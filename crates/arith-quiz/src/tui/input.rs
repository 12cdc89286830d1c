//! Keyboard input handling
//!
//! Maps crossterm key events to typed quiz actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::Level;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Append a character to the answer
    InsertChar(char),
    /// Delete the last character
    Backspace,
    /// Submit the answer
    Submit,
    /// Clear the answer
    ClearInput,
    /// Select the next operation
    NextOperation,
    /// Select the previous operation
    PrevOperation,
    /// Select a difficulty level
    SelectLevel(Level),
    /// Reset score and start over
    Reset,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        // Windows reports releases too
        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('r') => KeyAction::Reset,
                KeyCode::Char('u') => KeyAction::ClearInput,
                _ => KeyAction::None,
            };
        }

        if modifiers.contains(KeyModifiers::ALT) {
            return match code {
                KeyCode::Char(c @ '1'..='3') => Self::level_key(c),
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) if Self::is_answer_char(c) => KeyAction::InsertChar(c),
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Enter => KeyAction::Submit,
            KeyCode::Esc => KeyAction::ClearInput,
            KeyCode::Tab => KeyAction::NextOperation,
            KeyCode::BackTab => KeyAction::PrevOperation,
            KeyCode::F(1) => KeyAction::SelectLevel(Level::Easy),
            KeyCode::F(2) => KeyAction::SelectLevel(Level::Medium),
            KeyCode::F(3) => KeyAction::SelectLevel(Level::Difficult),
            _ => KeyAction::None,
        }
    }

    fn level_key(c: char) -> KeyAction {
        match c {
            '1' => KeyAction::SelectLevel(Level::Easy),
            '2' => KeyAction::SelectLevel(Level::Medium),
            '3' => KeyAction::SelectLevel(Level::Difficult),
            _ => KeyAction::None,
        }
    }

    /// Returns true if the character can appear in a typed answer
    #[must_use]
    pub fn is_answer_char(c: char) -> bool {
        c.is_ascii_digit() || c == '-' || c == '+'
    }
}
