//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(GameAction::Quit);
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up => Some(GameAction::Flap),
        KeyCode::Esc => Some(GameAction::Quit),
        _ => None,
    }
}

/// Map any terminal event, keeping only fresh key presses.
///
/// Auto-repeat would turn a held key into a stream of flaps, so it is
/// dropped along with releases.
pub fn handle_event(event: &Event) -> Option<GameAction> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(*key),
        _ => None,
    }
}
