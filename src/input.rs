//! Keyboard → `Command` mapping.

use crossterm::event::{KeyCode, KeyModifiers};
use space_invaders::Command;

pub fn command_for_key(code: KeyCode, modifiers: KeyModifiers) -> Command {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Command::MoveLeft,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Command::MoveRight,
        KeyCode::Char(' ') => Command::Shoot,
        KeyCode::Char('p') | KeyCode::Char('P') => Command::Pause,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        _ => Command::None,
    }
}
