//! The interpreter state machine the view binds to.
//!
//! A `Terminal` owns the input line, history, scrollback and command table.
//! The view forwards keys and reads the scrollback; nothing else mutates the
//! interpreter's state.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use chrono::{DateTime, Local};
use folio_types::config::{FolioConfig, Profile};
use folio_types::error::FolioError;
use folio_types::input::Key;

use crate::banner::render_banner;
use crate::builtin::{self, Builtin, Destination};
use crate::completion::{Completion, complete};
use crate::fragment::{Fragment, Style};
use crate::history::{HistoryBuffer, Recall};
use crate::interpreter::{Command, CommandTable, Context, ParsedLine, Resolved};
use crate::scrollback::Scrollback;

/// What a key press or request did, for the view to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed.
    Ignored,
    /// The input line changed.
    Edited,
    /// A scrollback entry was appended.
    Printed,
    /// The scrollback was emptied.
    Cleared,
    /// A scrollback entry was appended and the router should change page.
    Navigate(Destination),
}

/// Line editor, dispatcher and scrollback for one terminal session.
pub struct Terminal {
    table: CommandTable,
    profile: Profile,
    pages: Vec<String>,
    prompt: String,
    input: String,
    history: HistoryBuffer,
    scrollback: Scrollback,
}

impl Terminal {
    /// Build a terminal around a fully registered table.
    pub fn new(table: CommandTable, config: &FolioConfig) -> Self {
        log::debug!(
            "Terminal ready: {} commands, pages [{}]",
            table.len(),
            config.pages.join(", ")
        );
        Self {
            table,
            profile: config.profile.clone(),
            pages: config.pages.clone(),
            prompt: config.prompt.clone(),
            input: String::new(),
            history: HistoryBuffer::new(),
            scrollback: Scrollback::new(),
        }
    }

    // -- View binding --

    /// Route a key to the matching operation.
    pub fn handle_key(&mut self, key: Key) -> Outcome {
        match key {
            Key::Enter => self.submit(),
            Key::Up => self.history_up(),
            Key::Down => self.history_down(),
            Key::Tab => self.complete(),
            Key::Char(c) => {
                self.insert_char(c);
                Outcome::Edited
            },
            Key::Backspace => self.backspace(),
        }
    }

    /// Submit the current input line.
    pub fn submit(&mut self) -> Outcome {
        let line = self.input.trim().to_string();
        let Some(parsed) = ParsedLine::parse(&line) else {
            return Outcome::Ignored;
        };
        self.history.push(line.as_str());
        log::debug!("dispatch: {line}");

        let now = Local::now();
        let outcome = match self.table.resolve(&parsed.name) {
            Resolved::Builtin(Builtin::Clear) => {
                self.scrollback.clear();
                Outcome::Cleared
            },
            Resolved::Builtin(Builtin::Sudo) => {
                self.scrollback.push(&line, builtin::sudo_fragment(), now);
                Outcome::Printed
            },
            Resolved::Builtin(Builtin::Exit) => {
                self.scrollback.push(&line, builtin::exit_fragment(), now);
                Outcome::Printed
            },
            Resolved::Builtin(Builtin::Cd) => {
                let arg = parsed.args.first().copied();
                match Destination::resolve(arg, &self.pages) {
                    Some(dest) => {
                        self.scrollback
                            .push(&line, builtin::cd_confirmation(&dest), now);
                        Outcome::Navigate(dest)
                    },
                    None => {
                        let fragment = builtin::cd_rejection(arg.unwrap_or_default(), &self.pages);
                        self.scrollback.push(&line, fragment, now);
                        Outcome::Printed
                    },
                }
            },
            Resolved::Table(cmd) => {
                let fragment = self.run_command(cmd, &parsed, now);
                self.scrollback.push(&line, fragment, now);
                Outcome::Printed
            },
            Resolved::Unknown => {
                self.scrollback
                    .push(&line, not_found_fragment(parsed.typed), now);
                Outcome::Printed
            },
        };
        self.input.clear();
        outcome
    }

    /// Recall the previous history entry into the input line.
    pub fn history_up(&mut self) -> Outcome {
        match self.history.up() {
            Recall::Entry(entry) => {
                self.input = entry.to_string();
                Outcome::Edited
            },
            Recall::Cleared | Recall::Unchanged => Outcome::Ignored,
        }
    }

    /// Recall the next history entry, or empty the line past the newest.
    pub fn history_down(&mut self) -> Outcome {
        match self.history.down() {
            Recall::Entry(entry) => {
                self.input = entry.to_string();
                Outcome::Edited
            },
            Recall::Cleared => {
                self.input.clear();
                Outcome::Edited
            },
            Recall::Unchanged => Outcome::Ignored,
        }
    }

    /// Complete the input line against every known command name.
    ///
    /// One match replaces the input; several are listed in the scrollback
    /// (table commands in declaration order, then built-ins).
    pub fn complete(&mut self) -> Outcome {
        let names = self
            .table
            .names()
            .chain(Builtin::ALL.iter().map(|b| b.name()));
        match complete(&self.input, names) {
            Completion::NoMatch => Outcome::Ignored,
            Completion::Single(name) => {
                self.input = name;
                Outcome::Edited
            },
            Completion::Multiple(names) => {
                let listing = Fragment::line(Style::Muted, format!("Available: {}", names.join(", ")));
                self.scrollback.push(self.input.clone(), listing, Local::now());
                Outcome::Printed
            },
        }
    }

    // -- Line editing --

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) -> Outcome {
        match self.input.pop() {
            Some(_) => Outcome::Edited,
            None => Outcome::Ignored,
        }
    }

    // -- Read-only state --

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn scrollback(&self) -> &Scrollback {
        &self.scrollback
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    /// Welcome text shown above the scrollback.
    pub fn banner(&self) -> Fragment {
        let mut f = Fragment::lines(Style::Primary, render_banner(&self.profile.name));
        f.push_blank();
        f.push_line(Style::Primary, format!("Welcome to {}'s Terminal", self.profile.name));
        f.push_line(Style::Muted, self.profile.tagline.as_str());
        f.push_line(Style::Muted, "Type 'help' for available commands");
        f
    }

    /// Forget history, scrollback and the input line.
    pub fn reset(&mut self) {
        self.input.clear();
        self.history.clear();
        self.scrollback.clear();
    }

    /// Run a table command, turning errors and panics into output.
    fn run_command(&self, cmd: &dyn Command, parsed: &ParsedLine<'_>, now: DateTime<Local>) -> Fragment {
        let ctx = Context {
            table: &self.table,
            profile: &self.profile,
            now,
        };
        match catch_unwind(AssertUnwindSafe(|| cmd.execute(&parsed.args, &ctx))) {
            Ok(Ok(fragment)) => fragment,
            Ok(Err(e)) => {
                log::warn!("Command '{}' failed: {e}", parsed.name);
                let reason = match e {
                    FolioError::Command(msg) => msg,
                    other => other.to_string(),
                };
                failure_fragment(parsed.typed, &reason)
            },
            Err(payload) => {
                let reason = panic_message(payload.as_ref());
                log::warn!("Command '{}' panicked: {reason}", parsed.name);
                failure_fragment(parsed.typed, &reason)
            },
        }
    }
}

fn not_found_fragment(typed: &str) -> Fragment {
    Fragment::line(Style::Error, format!("Command '{typed}' not found."))
        .with_line(Style::Muted, "Type 'help' for available commands.")
}

fn failure_fragment(typed: &str, reason: &str) -> Fragment {
    Fragment::line(Style::Error, format!("Command '{typed}' failed: {reason}"))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "internal error".to_string()
    }
}
