//! Privileged built-ins.
//!
//! These names are intercepted before the command table is consulted because
//! they carry side effects a table handler cannot express: emptying the
//! scrollback or asking the router to change page.

use crate::fragment::{Fragment, Style};

/// A built-in resolved from the first token of a submitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Clear,
    Sudo,
    Exit,
    Cd,
}

impl Builtin {
    /// All built-ins, in the order completion lists them.
    pub const ALL: [Builtin; 4] = [Self::Clear, Self::Sudo, Self::Exit, Self::Cd];

    /// Match a lowercased command name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "clear" => Some(Self::Clear),
            "sudo" => Some(Self::Sudo),
            "exit" => Some(Self::Exit),
            "cd" => Some(Self::Cd),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Sudo => "sudo",
            Self::Exit => "exit",
            Self::Cd => "cd",
        }
    }

    /// One-line description for `help`.
    pub fn description(self) -> &'static str {
        match self {
            Self::Clear => "Clear the terminal",
            Self::Sudo => "Run a command as root",
            Self::Exit => "Leave the terminal",
            Self::Cd => "Go to another page",
        }
    }
}

/// Where `cd` asked the router to go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The terminal landing page.
    Home,
    /// One of the configured pages.
    Page(String),
}

impl Destination {
    /// Route path for the router (`/` or `/<page>`).
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Page(page) => format!("/{page}"),
        }
    }

    /// Resolve a `cd` argument against the page allow-list.
    ///
    /// No argument, `~`, `/` and `home` go to the landing page. Otherwise the
    /// argument is lowercased and stripped of surrounding slashes before it is
    /// compared with `pages`.
    pub fn resolve(arg: Option<&str>, pages: &[String]) -> Option<Self> {
        let Some(arg) = arg else {
            return Some(Self::Home);
        };
        let target = arg.trim_matches('/').to_lowercase();
        if target.is_empty() || target == "~" || target == "home" {
            return Some(Self::Home);
        }
        pages
            .iter()
            .find(|page| **page == target)
            .map(|page| Self::Page(page.clone()))
    }
}

pub(crate) fn sudo_fragment() -> Fragment {
    Fragment::line(Style::Error, "Nice try! This is a frontend terminal ;)")
}

pub(crate) fn exit_fragment() -> Fragment {
    Fragment::line(
        Style::Error,
        "Cannot exit browser terminal. Try closing the tab instead!",
    )
}

pub(crate) fn cd_confirmation(dest: &Destination) -> Fragment {
    Fragment::line(Style::Success, format!("Navigating to {}...", dest.path()))
}

pub(crate) fn cd_rejection(target: &str, pages: &[String]) -> Fragment {
    Fragment::line(Style::Error, format!("cd: no such page: {target}")).with_line(
        Style::Muted,
        format!("Available pages: {}", pages.join(", ")),
    )
}
