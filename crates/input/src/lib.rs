//! Key mapping from terminal events to engine commands.
//!
//! This crate is pure mapping; timing-sensitive concerns (autorepeat,
//! pause clocks) belong to the driver loop.

use blockfall_types::GameCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to an engine command.
pub fn command_for_key(key: KeyEvent) -> Option<GameCommand> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(GameCommand::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(GameCommand::MoveRight),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(GameCommand::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(GameCommand::Rotate),

        // Actions
        KeyCode::Char(' ') => Some(GameCommand::HardDrop),
        KeyCode::Char('c') => Some(GameCommand::Hold),
        KeyCode::Char('n') => Some(GameCommand::NewGame),

        _ => None,
    }
}

/// Quit keys: `q` or ctrl-c.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Pause toggle. Pause is a driver concept: the engine only sees the
/// resulting silence in tick/deadline events.
pub fn toggles_pause(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('p'))
}
