//! Tab completion over command names.

/// What a completion request found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    NoMatch,
    /// Exactly one name; the input line is replaced with it.
    Single(String),
    /// Several names, in the order they were offered.
    Multiple(Vec<String>),
}

/// Case-insensitive prefix match of `partial` against `names`.
///
/// Matches keep the order of `names` (declaration order) with duplicates
/// removed. Leading and trailing whitespace in `partial` is ignored, so an
/// empty partial offers every name.
pub fn complete<'a, I>(partial: &str, names: I) -> Completion
where
    I: IntoIterator<Item = &'a str>,
{
    let prefix = partial.trim().to_lowercase();
    let mut matches: Vec<String> = Vec::new();
    for name in names {
        if name.to_lowercase().starts_with(&prefix) && !matches.iter().any(|m| m == name) {
            matches.push(name.to_string());
        }
    }
    match matches.len() {
        0 => Completion::NoMatch,
        1 => Completion::Single(matches.remove(0)),
        _ => Completion::Multiple(matches),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_match() {
        assert_eq!(complete("he", ["help"]), Completion::Single("help".to_string()));
    }

    #[test]
    fn multiple_matches_keep_declaration_order() {
        assert_eq!(
            complete("he", ["help", "about", "hello"]),
            Completion::Multiple(vec!["help".to_string(), "hello".to_string()])
        );
    }

    #[test]
    fn no_match() {
        assert_eq!(complete("zz", ["help", "about"]), Completion::NoMatch);
        assert_eq!(complete("he", std::iter::empty()), Completion::NoMatch);
    }

    #[test]
    fn prefix_is_case_insensitive() {
        assert_eq!(complete("AB", ["about"]), Completion::Single("about".to_string()));
    }

    #[test]
    fn empty_partial_offers_everything() {
        assert_eq!(
            complete("", ["help", "about", "clear"]),
            Completion::Multiple(vec![
                "help".to_string(),
                "about".to_string(),
                "clear".to_string()
            ])
        );
        assert_eq!(complete("  ", ["only"]), Completion::Single("only".to_string()));
    }

    #[test]
    fn exact_name_still_completes() {
        assert_eq!(complete("help", ["help"]), Completion::Single("help".to_string()));
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(complete("cl", ["clear", "clear"]), Completion::Single("clear".to_string()));
    }
}
