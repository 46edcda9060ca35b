pub mod scheme;
pub mod tokenizer;

pub use scheme::Scheme;

use crate::error::ConvertError;
use crate::Config;
use anyhow::Result;
use lazy_static::lazy_static;
use rayon::prelude::*;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, trace};

lazy_static! {
    static ref DEFAULT_CONVERTER: CaseConverter = CaseConverter::default();
}

/// Tokenizes strings on a delimiter set and rejoins them under a [`Scheme`].
///
/// A converter holds nothing but its compiled splitter, so it can be shared
/// freely between threads.
#[derive(Debug, Clone)]
pub struct CaseConverter {
    splitter: Regex,
}

impl Default for CaseConverter {
    fn default() -> Self {
        Self {
            splitter: tokenizer::DEFAULT_SPLITTER.clone(),
        }
    }
}

impl CaseConverter {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_delimiters(&config.delimiters)
    }

    /// Use `delimiters` in addition to whitespace
    pub fn with_delimiters(delimiters: &[char]) -> Result<Self> {
        let splitter = tokenizer::build_splitter(delimiters)?;
        debug!(?delimiters, pattern = splitter.as_str(), "Built case converter");
        Ok(Self { splitter })
    }

    pub fn tokenize<'a>(&self, input: &'a str) -> Vec<&'a str> {
        tokenizer::tokenize(&self.splitter, input)
    }

    /// Convert `input` to `scheme`.
    ///
    /// Blank input short-circuits to an empty string before tokenization.
    pub fn convert(&self, input: &str, scheme: Scheme) -> String {
        if input.trim().is_empty() {
            return String::new();
        }

        let tokens = self.tokenize(input);
        trace!(%scheme, tokens = tokens.len(), "Converting input");
        scheme.join(&tokens)
    }

    /// Convert a value coming from an untyped caller.
    ///
    /// Anything but a JSON string fails with [`ConvertError::TypeKind`] naming
    /// the received type, before any other processing happens.
    pub fn convert_value(&self, input: &Value, scheme: Scheme) -> Result<String, ConvertError> {
        match input {
            Value::String(text) => Ok(self.convert(text, scheme)),
            other => Err(ConvertError::TypeKind(type_name(other))),
        }
    }

    /// Convert many inputs in parallel. Output order matches input order.
    pub fn convert_batch<S>(&self, inputs: &[S], scheme: Scheme) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        inputs
            .par_iter()
            .map(|input| self.convert(input.as_ref(), scheme))
            .collect()
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Convert with the default delimiter set
pub fn convert(input: &str, scheme: Scheme) -> String {
    DEFAULT_CONVERTER.convert(input, scheme)
}

pub fn camel_case(input: &str) -> String {
    convert(input, Scheme::Camel)
}

pub fn kebab_case(input: &str) -> String {
    convert(input, Scheme::Kebab)
}

pub fn dot_case(input: &str) -> String {
    convert(input, Scheme::Dot)
}
