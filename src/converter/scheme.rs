use crate::error::ConvertError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {
    // Kebab output is a slug: ASCII letters, digits and hyphens only
    static ref NON_KEBAB_CHAR: Regex = Regex::new(r"[^a-zA-Z0-9-]").unwrap();
    static ref HYPHEN_RUN: Regex = Regex::new(r"-+").unwrap();
}

/// How tokens are rejoined into the converted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// `helloWorldExample`
    #[default]
    Camel,
    /// `hello-world-example`
    Kebab,
    /// `hello.world.example`
    Dot,
}

impl Scheme {
    pub const ALL: [Scheme; 3] = [Scheme::Camel, Scheme::Kebab, Scheme::Dot];

    /// Rejoin tokens under this scheme. Zero tokens always produce an empty string.
    pub fn join(&self, tokens: &[&str]) -> String {
        match self {
            Scheme::Camel => join_camel(tokens),
            Scheme::Dot => join_lowercase(tokens, "."),
            Scheme::Kebab => sanitize_kebab(&join_lowercase(tokens, "-")),
        }
    }
}

fn join_lowercase(tokens: &[&str], separator: &str) -> String {
    tokens
        .iter()
        .map(|token| token.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

fn join_camel(tokens: &[&str]) -> String {
    let mut result = String::with_capacity(tokens.iter().map(|t| t.len()).sum());

    for (index, token) in tokens.iter().enumerate() {
        let lower = token.to_lowercase();
        if index == 0 {
            result.push_str(&lower);
            continue;
        }

        // Capitalize the first grapheme so combining marks stay attached
        let mut graphemes = lower.graphemes(true);
        if let Some(first) = graphemes.next() {
            result.push_str(&first.to_uppercase());
            result.push_str(graphemes.as_str());
        }
    }

    result
}

fn sanitize_kebab(joined: &str) -> String {
    let stripped = NON_KEBAB_CHAR.replace_all(joined, "");
    let collapsed = HYPHEN_RUN.replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}

impl FromStr for Scheme {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" | "camelcase" | "camel-case" => Ok(Scheme::Camel),
            "kebab" | "kebabcase" | "kebab-case" => Ok(Scheme::Kebab),
            "dot" | "dotcase" | "dot.case" => Ok(Scheme::Dot),
            _ => Err(ConvertError::UnknownScheme(s.to_string())),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Camel => write!(f, "camel"),
            Scheme::Kebab => write!(f, "kebab"),
            Scheme::Dot => write!(f, "dot"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_join() {
        assert_eq!(Scheme::Camel.join(&["Hello", "and", "WELCOME"]), "helloAndWelcome");
        assert_eq!(Scheme::Camel.join(&["single"]), "single");
    }

    #[test]
    fn test_dot_join() {
        assert_eq!(Scheme::Dot.join(&["Hello", "World"]), "hello.world");
    }

    #[test]
    fn test_kebab_join_sanitizes() {
        assert_eq!(Scheme::Kebab.join(&["Hello", "World!"]), "hello-world");
        assert_eq!(Scheme::Kebab.join(&["a.b", "c"]), "ab-c");
        // A token made only of stripped characters must not leave a double hyphen
        assert_eq!(Scheme::Kebab.join(&["foo", "!!", "bar"]), "foo-bar");
        assert_eq!(Scheme::Kebab.join(&["@", "bar"]), "bar");
    }

    #[test]
    fn test_zero_tokens_is_empty() {
        for scheme in Scheme::ALL {
            assert_eq!(scheme.join(&[]), "");
        }
    }

    #[test]
    fn test_camel_capitalizes_unicode_first_letter() {
        assert_eq!(Scheme::Camel.join(&["hello", "émile"]), "helloÉmile");
    }

    #[test]
    fn test_scheme_parsing() {
        assert_eq!("camel".parse::<Scheme>().unwrap(), Scheme::Camel);
        assert_eq!("Kebab-Case".parse::<Scheme>().unwrap(), Scheme::Kebab);
        assert_eq!("dot.case".parse::<Scheme>().unwrap(), Scheme::Dot);
        assert_eq!(
            "snake".parse::<Scheme>(),
            Err(ConvertError::UnknownScheme("snake".to_string()))
        );
    }

    #[test]
    fn test_scheme_display_round_trips_through_parse() {
        for scheme in Scheme::ALL {
            assert_eq!(scheme.to_string().parse::<Scheme>().unwrap(), scheme);
        }
    }
}
