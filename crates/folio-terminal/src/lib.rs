//! Command interpreter behind the folio landing page.
//!
//! The terminal is a table-based dispatch system. Commands implement the
//! `Command` trait and are registered by name in a `CommandTable`. A
//! `Terminal` owns the table together with the input line, the history
//! buffer and the scrollback, and turns key presses into output fragments
//! and navigation signals.

mod banner;
mod builtin;
mod completion;
mod fragment;
mod history;
mod interpreter;
pub mod portfolio_commands;
mod scrollback;
mod terminal;

/// Render a name as large block letters.
pub use banner::render_banner;
/// Privileged built-in commands and the `cd` destination type.
pub use builtin::{Builtin, Destination};
/// Prefix completion over command names.
pub use completion::{Completion, complete};
/// Structured, escaped-on-render command output.
pub use fragment::{Fragment, Span, Style, escape_html};
/// Input history with a recall cursor.
pub use history::{HistoryBuffer, Recall};
/// A single executable command and the table that dispatches it.
pub use interpreter::{Command, CommandTable, Context, ParsedLine, Resolved};
/// Register the portfolio command set (about, skills, projects, ...).
pub use portfolio_commands::register_portfolio_commands;
/// Append-only log of processed commands.
pub use scrollback::{Scrollback, ScrollbackEntry};
/// The interpreter state machine the view binds to.
pub use terminal::{Outcome, Terminal};
