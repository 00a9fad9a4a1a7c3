//! folio terminal entry point.
//!
//! Runs the portfolio interpreter in a raw-mode terminal. Type commands at
//! the prompt; Up/Down recall history, Tab completes command names, and
//! Esc or Ctrl+C quits.

mod input;
mod render;
mod router;

use std::io::Stdout;
use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{cursor, execute};
use folio_terminal::{CommandTable, Outcome, Terminal, register_portfolio_commands};
use folio_types::config::FolioConfig;

use input::{InputAction, map_key};
use router::Router;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// stderr shares the tty with the raw-mode view, so only warnings and errors
/// are shown unless `RUST_LOG` asks for more.
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER),
    )
    .init();

    let arg = std::env::args().nth(1);
    if matches!(arg.as_deref(), Some("--version" | "-v")) {
        println!("folio {APP_VERSION}");
        return Ok(());
    }

    // Resolve config from CLI arg, FOLIO_CONFIG env var, or defaults.
    let config_path = arg
        .or_else(|| std::env::var("FOLIO_CONFIG").ok())
        .map(PathBuf::from);
    let config = match config_path {
        Some(path) => FolioConfig::load(&path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => {
            log::info!("No config given, using defaults");
            FolioConfig::default()
        },
    };

    let mut table = CommandTable::new();
    register_portfolio_commands(&mut table).context("register commands")?;
    let mut term = Terminal::new(table, &config);
    log::info!(
        "Starting folio ({} commands, prompt {:?})",
        term.table().len(),
        term.prompt()
    );

    let mut stdout = setup_terminal()?;
    let result = run(&mut stdout, &mut term);
    restore_terminal(&mut stdout)?;
    result
}

fn run(stdout: &mut Stdout, term: &mut Terminal) -> Result<()> {
    let mut router = Router::new();
    let mut rows = crossterm::terminal::size().map(|(_, h)| h).unwrap_or(24);
    render::draw(stdout, term, &router, rows).context("draw")?;

    loop {
        let redraw = match event::read().context("event read")? {
            Event::Key(key) => match map_key(&key) {
                InputAction::Quit => break,
                InputAction::Ignore => false,
                InputAction::Key(k) => match term.handle_key(k) {
                    Outcome::Ignored => false,
                    Outcome::Navigate(dest) => {
                        router.navigate(dest);
                        true
                    },
                    Outcome::Edited | Outcome::Printed | Outcome::Cleared => true,
                },
            },
            Event::Resize(_, h) => {
                rows = h;
                true
            },
            _ => false,
        };
        if redraw {
            render::draw(stdout, term, &router, rows).context("draw")?;
        }
    }
    Ok(())
}

fn setup_terminal() -> Result<Stdout> {
    let mut stdout = std::io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    Ok(stdout)
}

fn restore_terminal(stdout: &mut Stdout) -> Result<()> {
    execute!(stdout, LeaveAlternateScreen, cursor::Show).ok();
    disable_raw_mode().context("disable raw mode")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn default_log_filter_hides_info() {
        let level = log::LevelFilter::from_str(DEFAULT_LOG_FILTER).unwrap();
        assert!(level < log::LevelFilter::Info);
    }
}
