//! Append-only log of processed commands.

use chrono::{DateTime, Local};

use crate::fragment::Fragment;

/// One processed command and what it printed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollbackEntry {
    /// The line as the user typed it.
    pub command: String,
    /// Output; may be empty, in which case only the command is shown.
    pub output: Fragment,
    pub created_at: DateTime<Local>,
}

/// Ordered scrollback, oldest first. Only the interpreter mutates it.
#[derive(Debug, Clone, Default)]
pub struct Scrollback {
    entries: Vec<ScrollbackEntry>,
}

impl Scrollback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: impl Into<String>, output: Fragment, created_at: DateTime<Local>) {
        self.entries.push(ScrollbackEntry {
            command: command.into(),
            output,
            created_at,
        });
    }

    /// Drop every entry at once.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[ScrollbackEntry] {
        &self.entries
    }

    /// The newest entry, which the view scrolls to.
    pub fn last(&self) -> Option<&ScrollbackEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
