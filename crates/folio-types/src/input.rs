//! Platform-agnostic key events.
//!
//! Every front-end maps its native keyboard input to [`Key`]. The
//! interpreter core never sees raw terminal events.

/// A key the terminal view forwards to the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Submit the current line.
    Enter,
    /// Recall the previous history entry.
    Up,
    /// Recall the next history entry.
    Down,
    /// Request command-name completion.
    Tab,
    /// Character typed into the input line.
    Char(char),
    /// Delete the character left of the end of the line.
    Backspace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_keys_compare_by_value() {
        assert_ne!(Key::Char('a'), Key::Char('b'));
        assert_eq!(Key::Char('x'), Key::Char('x'));
    }
}
