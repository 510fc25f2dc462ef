//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a game command.
///
/// Releases are ignored. Terminal auto-repeat is passed through so holding an
/// arrow keeps the piece moving.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(Command::SoftDrop),
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W' | 'x' | 'X') => Some(Command::RotateCw),
        KeyCode::Char(' ') => Some(Command::HardDrop),
        KeyCode::Esc | KeyCode::Char('p' | 'P') => Some(Command::TogglePause),
        KeyCode::Enter | KeyCode::Char('n' | 'N') => Some(Command::Start),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> Option<Command> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(press(KeyCode::Left), Some(Command::MoveLeft));
        assert_eq!(press(KeyCode::Right), Some(Command::MoveRight));
        assert_eq!(press(KeyCode::Down), Some(Command::SoftDrop));
        assert_eq!(press(KeyCode::Char('H')), Some(Command::MoveLeft));
        assert_eq!(press(KeyCode::Char('d')), Some(Command::MoveRight));
        assert_eq!(press(KeyCode::Char('J')), Some(Command::SoftDrop));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(press(KeyCode::Up), Some(Command::RotateCw));
        assert_eq!(press(KeyCode::Char('x')), Some(Command::RotateCw));
        assert_eq!(press(KeyCode::Char(' ')), Some(Command::HardDrop));
        assert_eq!(press(KeyCode::Char('p')), Some(Command::TogglePause));
        assert_eq!(press(KeyCode::Esc), Some(Command::TogglePause));
        assert_eq!(press(KeyCode::Enter), Some(Command::Start));
        assert_eq!(press(KeyCode::Char('c')), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key_event(release), None);
        assert!(!should_quit(KeyEvent { code: KeyCode::Char('q'), ..release }));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
