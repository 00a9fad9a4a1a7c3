//! Command trait, table, and line parsing.

use std::collections::HashMap;

use chrono::{DateTime, Local};
use folio_types::config::Profile;
use folio_types::error::{FolioError, Result};

use crate::builtin::Builtin;
use crate::fragment::Fragment;

/// Read-only data a command may consult while it runs.
pub struct Context<'a> {
    /// The table the command was dispatched from (for `help`).
    pub table: &'a CommandTable,
    /// Site owner content.
    pub profile: &'a Profile,
    /// Time of the submission.
    pub now: DateTime<Local>,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "git clone <project>").
    fn usage(&self) -> &str {
        self.name()
    }

    /// Produce the output for the given arguments.
    fn execute(&self, args: &[&str], ctx: &Context<'_>) -> Result<Fragment>;
}

/// Immutable-after-startup mapping from command name to handler.
///
/// Names are stored lowercased; lookups fold case the same way, so every
/// case variant of a registered name resolves to the same command.
/// Declaration order is preserved for `help` and completion.
#[derive(Default)]
pub struct CommandTable {
    commands: Vec<(String, Box<dyn Command>)>,
    index: HashMap<String, usize>,
}

impl CommandTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command. Replaces any existing command with the same name,
    /// keeping its original position.
    ///
    /// Fails for names that are empty or contain whitespace. A name that
    /// matches a privileged built-in is accepted but never dispatched.
    pub fn register(&mut self, cmd: Box<dyn Command>) -> Result<()> {
        let key = cmd.name().to_lowercase();
        if key.is_empty() || key.chars().any(char::is_whitespace) {
            return Err(FolioError::Command(format!(
                "invalid command name: {:?}",
                cmd.name()
            )));
        }
        if Builtin::parse(&key).is_some() {
            log::warn!("Command '{key}' is shadowed by the built-in of the same name");
        }
        match self.index.get(&key) {
            Some(&i) => self.commands[i].1 = cmd,
            None => {
                self.index.insert(key.clone(), self.commands.len());
                self.commands.push((key, cmd));
            },
        }
        Ok(())
    }

    /// Case-insensitive exact lookup.
    pub fn lookup(&self, name: &str) -> Option<&dyn Command> {
        let i = *self.index.get(&name.to_lowercase())?;
        Some(self.commands[i].1.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&name.to_lowercase())
    }

    /// Registered names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|(name, _)| name.as_str())
    }

    /// `(name, description)` pairs in declaration order.
    pub fn list(&self) -> Vec<(&str, &str)> {
        self.commands
            .iter()
            .map(|(name, cmd)| (name.as_str(), cmd.description()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Classify a lowercased command name. Built-ins win over the table.
    pub fn resolve(&self, name: &str) -> Resolved<'_> {
        if let Some(builtin) = Builtin::parse(name) {
            return Resolved::Builtin(builtin);
        }
        match self.lookup(name) {
            Some(cmd) => Resolved::Table(cmd),
            None => Resolved::Unknown,
        }
    }
}

/// How a submitted command name was resolved.
pub enum Resolved<'t> {
    Builtin(Builtin),
    Table(&'t dyn Command),
    Unknown,
}

/// A submitted line split on whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    /// Case-folded command name.
    pub name: String,
    /// Command name as typed.
    pub typed: &'a str,
    pub args: Vec<&'a str>,
}

impl<'a> ParsedLine<'a> {
    /// Split `line` into name and arguments. `None` for blank input.
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let typed = tokens.next()?;
        Some(Self {
            name: typed.to_lowercase(),
            typed,
            args: tokens.collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::Style;

    struct EchoCmd;
    impl Command for EchoCmd {
        fn name(&self) -> &str {
            "echo"
        }
        fn description(&self) -> &str {
            "Print arguments"
        }
        fn usage(&self) -> &str {
            "echo [text...]"
        }
        fn execute(&self, args: &[&str], _ctx: &Context<'_>) -> Result<Fragment> {
            Ok(Fragment::line(Style::Plain, args.join(" ")))
        }
    }

    struct Fixed(&'static str, &'static str);
    impl Command for Fixed {
        fn name(&self) -> &str {
            self.0
        }
        fn description(&self) -> &str {
            self.1
        }
        fn execute(&self, _args: &[&str], _ctx: &Context<'_>) -> Result<Fragment> {
            Ok(Fragment::line(Style::Info, self.1))
        }
    }

    fn run(table: &CommandTable, name: &str, args: &[&str]) -> Fragment {
        let profile = Profile::default();
        let ctx = Context {
            table,
            profile: &profile,
            now: Local::now(),
        };
        table.lookup(name).unwrap().execute(args, &ctx).unwrap()
    }

    #[test]
    fn register_and_lookup() {
        let mut table = CommandTable::new();
        table.register(Box::new(EchoCmd)).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(run(&table, "echo", &["hello", "world"]).to_plain(), "hello world");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut table = CommandTable::new();
        table.register(Box::new(EchoCmd)).unwrap();
        assert!(table.lookup("ECHO").is_some());
        assert!(table.lookup("Echo").is_some());
        assert!(table.contains("eChO"));
    }

    #[test]
    fn lookup_has_no_prefix_matching() {
        let mut table = CommandTable::new();
        table.register(Box::new(EchoCmd)).unwrap();
        assert!(table.lookup("ech").is_none());
        assert!(table.lookup("echoo").is_none());
    }

    #[test]
    fn mixed_case_registration_is_folded() {
        let mut table = CommandTable::new();
        table.register(Box::new(Fixed("About", "me"))).unwrap();
        assert!(table.lookup("about").is_some());
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["about"]);
    }

    #[test]
    fn register_replaces_in_place() {
        let mut table = CommandTable::new();
        table.register(Box::new(Fixed("a", "first"))).unwrap();
        table.register(Box::new(Fixed("b", "other"))).unwrap();
        table.register(Box::new(Fixed("a", "second"))).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.list(), vec![("a", "second"), ("b", "other")]);
        assert_eq!(run(&table, "a", &[]).to_plain(), "second");
    }

    #[test]
    fn names_keep_declaration_order() {
        let mut table = CommandTable::new();
        for name in ["help", "about", "contact", "ls"] {
            table.register(Box::new(Fixed(name, ""))).unwrap();
        }
        assert_eq!(
            table.names().collect::<Vec<_>>(),
            vec!["help", "about", "contact", "ls"]
        );
    }

    #[test]
    fn builtin_names_register_but_resolve_to_builtin() {
        let mut table = CommandTable::new();
        for name in ["clear", "SUDO", "exit", "cd"] {
            table.register(Box::new(Fixed(name, "shadowed"))).unwrap();
        }
        assert_eq!(table.len(), 4);
        assert!(matches!(table.resolve("clear"), Resolved::Builtin(Builtin::Clear)));
        assert!(matches!(table.resolve("sudo"), Resolved::Builtin(Builtin::Sudo)));
    }

    #[test]
    fn invalid_names_rejected() {
        let mut table = CommandTable::new();
        assert!(table.register(Box::new(Fixed("", ""))).is_err());
        assert!(table.register(Box::new(Fixed("two words", ""))).is_err());
    }

    #[test]
    fn resolve_prefers_builtins() {
        let mut table = CommandTable::new();
        table.register(Box::new(EchoCmd)).unwrap();
        assert!(matches!(table.resolve("clear"), Resolved::Builtin(Builtin::Clear)));
        assert!(matches!(table.resolve("cd"), Resolved::Builtin(Builtin::Cd)));
        assert!(matches!(table.resolve("echo"), Resolved::Table(_)));
        assert!(matches!(table.resolve("nope"), Resolved::Unknown));
    }

    #[test]
    fn default_usage_is_name() {
        assert_eq!(Fixed("about", "").usage(), "about");
        assert_eq!(EchoCmd.usage(), "echo [text...]");
    }

    #[test]
    fn parse_line_splits_on_whitespace() {
        let parsed = ParsedLine::parse("  Cd \t blog  extra ").unwrap();
        assert_eq!(parsed.name, "cd");
        assert_eq!(parsed.typed, "Cd");
        assert_eq!(parsed.args, vec!["blog", "extra"]);
    }

    #[test]
    fn parse_blank_line() {
        assert!(ParsedLine::parse("").is_none());
        assert!(ParsedLine::parse(" \t\n ").is_none());
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn every_case_variant_resolves_to_same_command(
                name in "[a-z][a-z0-9-]{0,11}",
                flips in proptest::collection::vec(any::<bool>(), 12),
            ) {
                prop_assume!(Builtin::parse(&name).is_none());
                let mut table = CommandTable::new();
                table.register(Box::new(EchoCmd)).unwrap();
                let leaked: &'static str = Box::leak(name.clone().into_boxed_str());
                table.register(Box::new(Fixed(leaked, "target"))).unwrap();

                let variant: String = name
                    .chars()
                    .zip(flips.iter().cycle())
                    .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
                    .collect();
                let a = table.lookup(&name).map(|c| c.description().to_string());
                let b = table.lookup(&variant).map(|c| c.description().to_string());
                prop_assert_eq!(a, b);
            }
        }
    }
}
