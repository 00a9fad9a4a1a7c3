use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_types::input::Key;

/// What the event loop should do with one crossterm key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Forward to the interpreter.
    Key(Key),
    Quit,
    Ignore,
}

/// Map a crossterm key event to an interpreter key.
///
/// Esc and Ctrl+C quit. Release events and unsupported keys are ignored.
pub fn map_key(event: &KeyEvent) -> InputAction {
    if matches!(event.kind, KeyEventKind::Release) {
        return InputAction::Ignore;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') | KeyCode::Char('d') => InputAction::Quit,
            _ => InputAction::Ignore,
        };
    }
    match event.code {
        KeyCode::Esc => InputAction::Quit,
        KeyCode::Enter => InputAction::Key(Key::Enter),
        KeyCode::Up => InputAction::Key(Key::Up),
        KeyCode::Down => InputAction::Key(Key::Down),
        KeyCode::Tab => InputAction::Key(Key::Tab),
        KeyCode::Backspace => InputAction::Key(Key::Backspace),
        KeyCode::Char(c) => InputAction::Key(Key::Char(c)),
        _ => InputAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(map_key(&press(KeyCode::Enter)), InputAction::Key(Key::Enter));
        assert_eq!(map_key(&press(KeyCode::Up)), InputAction::Key(Key::Up));
        assert_eq!(map_key(&press(KeyCode::Down)), InputAction::Key(Key::Down));
        assert_eq!(map_key(&press(KeyCode::Tab)), InputAction::Key(Key::Tab));
        assert_eq!(
            map_key(&press(KeyCode::Backspace)),
            InputAction::Key(Key::Backspace)
        );
    }

    #[test]
    fn shifted_characters_pass_through() {
        let ev = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(map_key(&ev), InputAction::Key(Key::Char('A')));
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key(&press(KeyCode::Esc)), InputAction::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&ctrl_c), InputAction::Quit);
    }

    #[test]
    fn other_control_chords_are_ignored() {
        let ctrl_l = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&ctrl_l), InputAction::Ignore);
        assert_eq!(map_key(&press(KeyCode::F(1))), InputAction::Ignore);
    }

    #[test]
    fn release_is_ignored() {
        let mut ev = press(KeyCode::Enter);
        ev.kind = KeyEventKind::Release;
        assert_eq!(map_key(&ev), InputAction::Ignore);
    }
}
