//! Input handling - convert key events to UI actions

use crawl_core::action::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks for while the map has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Move(Direction),
    Undo,
    Reset,
    /// Focus the command line
    StartCommand,
    Quit,
}

/// Convert a key event to a UI action.
///
/// Only used outside command-input mode; there every printable key is text.
pub fn key_to_action(key: KeyEvent) -> Option<UiAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(UiAction::Quit),
            _ => None,
        };
    }

    match key.code {
        // Arrow keys
        KeyCode::Up => Some(UiAction::Move(Direction::North)),
        KeyCode::Down => Some(UiAction::Move(Direction::South)),
        KeyCode::Left => Some(UiAction::Move(Direction::West)),
        KeyCode::Right => Some(UiAction::Move(Direction::East)),

        // Vi keys
        KeyCode::Char('k') => Some(UiAction::Move(Direction::North)),
        KeyCode::Char('j') => Some(UiAction::Move(Direction::South)),
        KeyCode::Char('h') => Some(UiAction::Move(Direction::West)),
        KeyCode::Char('l') => Some(UiAction::Move(Direction::East)),

        KeyCode::Char('u') => Some(UiAction::Undo),
        KeyCode::Char('r') => Some(UiAction::Reset),
        KeyCode::Tab | KeyCode::Char(':') => Some(UiAction::StartCommand),
        KeyCode::Char('Q') | KeyCode::Esc => Some(UiAction::Quit),
        _ => None,
    }
}
