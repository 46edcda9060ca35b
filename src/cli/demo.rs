use crate::{CaseConverter, Scheme};
use colored::*;
use serde_json::json;

/// Inputs shown by `recase demo`
pub const SAMPLE_INPUTS: &[&str] = &[
    "Hello and welcome",
    "hello world",
    "hello_world_foo",
    "hello-world-bar",
    "hello  world  baz",
    "hello_world-foo bar",
    "Hello World",
    "This_is_a_test",
    "Multiple   spaces",
    "",
    "   ",
];

/// Sample conversions for every scheme, followed by the non-string error case
pub fn demo_lines(converter: &CaseConverter, colored: bool) -> Vec<String> {
    let mut lines = Vec::new();

    for scheme in Scheme::ALL {
        if colored {
            lines.push(format!("{}", scheme.to_string().bold().underline()));
        } else {
            lines.push(scheme.to_string());
        }

        for input in SAMPLE_INPUTS {
            let output = converter.convert(input, scheme);
            if colored {
                lines.push(format!(
                    "  {:<24} {} {}",
                    format!("{:?}", input),
                    "→".dimmed(),
                    format!("{:?}", output).green()
                ));
            } else {
                lines.push(format!("  {:<24} → {:?}", format!("{:?}", input), output));
            }
        }
        lines.push(String::new());
    }

    if let Err(e) = converter.convert_value(&json!(123), Scheme::Camel) {
        if colored {
            lines.push(format!("{} 123 {}", "✗".red().bold(), e.to_string().red()));
        } else {
            lines.push(format!("✗ 123 {}", e));
        }
    }

    lines
}

pub fn run(converter: &CaseConverter, colored: bool) {
    for line in demo_lines(converter, colored) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_covers_every_scheme() {
        let lines = demo_lines(&CaseConverter::default(), false);

        assert!(lines.iter().any(|l| l.contains("\"helloAndWelcome\"")));
        assert!(lines.iter().any(|l| l.contains("\"this-is-a-test\"")));
        assert!(lines.iter().any(|l| l.contains("\"hello.world.foo.bar\"")));
        assert_eq!(lines.iter().filter(|l| l.ends_with("→ \"\"")).count(), 6);
    }

    #[test]
    fn test_demo_shows_type_error() {
        let lines = demo_lines(&CaseConverter::default(), false);
        assert_eq!(
            lines.last().map(String::as_str),
            Some("✗ 123 Expected a string, but received number")
        );
    }
}
