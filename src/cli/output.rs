use crate::{BatchResult, ConvertError, Scheme};
use anyhow::{Context, Result};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonEntry {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    scheme: String,
    total: usize,
    errors: usize,
    results: Vec<JsonEntry>,
}

/// Print converted values to stdout and failures to stderr
pub fn print_results(
    result: &BatchResult,
    scheme: Scheme,
    colored_output: bool,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print_text_results(result, colored_output);
            Ok(())
        }
        OutputFormat::Json => {
            println!("{}", render_json(result, scheme)?);
            Ok(())
        }
    }
}

fn print_text_results(result: &BatchResult, colored_output: bool) {
    for conversion in &result.conversions {
        match &conversion.outcome {
            Ok(output) => println!("{}", output),
            Err(e) => eprintln!("{}", format_failure(&conversion.input, e, colored_output)),
        }
    }
}

pub fn render_json(result: &BatchResult, scheme: Scheme) -> Result<String> {
    let results = result
        .conversions
        .iter()
        .map(|c| match &c.outcome {
            Ok(output) => JsonEntry {
                input: c.input.clone(),
                output: Some(output.clone()),
                error: None,
            },
            Err(e) => JsonEntry {
                input: c.input.clone(),
                output: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    let output = JsonOutput {
        scheme: scheme.to_string(),
        total: result.conversions.len(),
        errors: result.error_count,
        results,
    };

    serde_json::to_string_pretty(&output).context("Failed to serialize results")
}

fn format_failure(input: &str, error: &ConvertError, colored: bool) -> String {
    if colored {
        format!(
            "{} {} {}",
            "✗".red().bold(),
            input.yellow(),
            error.to_string().red()
        )
    } else {
        format!("✗ {} {}", input, error)
    }
}

/// Summarize failures on stderr; silent when everything converted
pub fn print_summary(result: &BatchResult, colored: bool) {
    if result.error_count == 0 {
        return;
    }

    let error_word = if result.error_count == 1 { "input" } else { "inputs" };
    let total = result.conversions.len();
    if colored {
        eprintln!(
            "\n{} {} of {} {} failed to convert",
            "✗".red().bold(),
            result.error_count.to_string().red().bold(),
            total,
            error_word
        );
    } else {
        eprintln!(
            "\n✗ {} of {} {} failed to convert",
            result.error_count, total, error_word
        );
    }
}
