use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;

/// Delimiters used on top of whitespace when nothing else is configured
pub const DEFAULT_DELIMITERS: [char; 2] = ['_', '-'];

lazy_static! {
    pub(crate) static ref DEFAULT_SPLITTER: Regex = Regex::new(r"[\s_-]+").unwrap();
}

/// Build a regex matching a run of one or more delimiters.
///
/// Whitespace always delimits; `delimiters` adds to it. Every character is
/// escaped, so sets like `['^', ']']` are taken literally.
pub fn build_splitter(delimiters: &[char]) -> Result<Regex> {
    let class: String = delimiters
        .iter()
        .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
        .collect();

    Regex::new(&format!(r"[\s{}]+", class))
        .with_context(|| format!("Invalid delimiter set: {:?}", delimiters))
}

/// Split on delimiter runs, dropping the empty pieces at either end.
pub fn tokenize<'a>(splitter: &Regex, input: &'a str) -> Vec<&'a str> {
    splitter
        .split(input)
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_splitting() {
        assert_eq!(
            tokenize(&DEFAULT_SPLITTER, "hello_world-foo bar"),
            vec!["hello", "world", "foo", "bar"]
        );
        assert_eq!(
            tokenize(&DEFAULT_SPLITTER, "  padded\tand\nmixed  "),
            vec!["padded", "and", "mixed"]
        );
    }

    #[test]
    fn test_mixed_delimiter_runs_collapse() {
        assert_eq!(tokenize(&DEFAULT_SPLITTER, "a_- b"), vec!["a", "b"]);
        assert!(tokenize(&DEFAULT_SPLITTER, "-_-").is_empty());
    }

    #[test]
    fn test_built_splitter_matches_default() {
        let splitter = build_splitter(&DEFAULT_DELIMITERS).unwrap();
        let input = "__Leading and_trailing--";
        assert_eq!(
            tokenize(&splitter, input),
            tokenize(&DEFAULT_SPLITTER, input)
        );
    }

    #[test]
    fn test_custom_delimiters_are_literal() {
        let splitter = build_splitter(&['.', ']', '^']).unwrap();
        assert_eq!(tokenize(&splitter, "a.b]c^d e"), vec!["a", "b", "c", "d", "e"]);
        // Hyphen is no longer a delimiter once the set is replaced
        assert_eq!(tokenize(&splitter, "x-y.z"), vec!["x-y", "z"]);
    }
}
