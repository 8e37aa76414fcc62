//! Key mapping from terminal events to game intents.

use crate::types::GameIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game intents.
///
/// Soft drop maps to its engaged form; releases are synthesized by
/// [`crate::handler::InputHandler`] because most terminals never report
/// key-up events.
pub fn handle_key_event(key: KeyEvent) -> Option<GameIntent> {
    match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(GameIntent::MoveLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(GameIntent::MoveRight),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(GameIntent::SoftDrop(true)),

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char(' ') => Some(GameIntent::Rotate),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key toggles the pause state.
pub fn wants_pause(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc)
}

/// Check if key restarts the session.
pub fn wants_restart(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}
