//! Key mapping from terminal events to intents.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::{Intent, IntentEvent};

/// Map a key code to the intent it drives.
pub fn intent_for_key(code: KeyCode) -> Option<Intent> {
    let intent = match code {
        KeyCode::Left => Intent::Left,
        KeyCode::Right => Intent::Right,
        KeyCode::Down => Intent::Down,
        KeyCode::Up => Intent::Up,
        // vi and wasd clusters, either case
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'h' | 'a' => Intent::Left,
            'l' | 'd' => Intent::Right,
            'j' | 's' => Intent::Down,
            'k' | 'w' => Intent::Up,
            _ => return None,
        },
        _ => return None,
    };
    Some(intent)
}

/// Map a keyboard event to an input-boundary event.
///
/// Terminal auto-repeat (`KeyEventKind::Repeat`) is ignored; holding is
/// tracked from the press until the release.
pub fn handle_key_event(key: KeyEvent) -> Option<IntentEvent> {
    let intent = intent_for_key(key.code)?;
    match key.kind {
        KeyEventKind::Press => Some(IntentEvent::press(intent)),
        KeyEventKind::Release => Some(IntentEvent::release(intent)),
        KeyEventKind::Repeat => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key should restart the board.
pub fn should_restart(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}
