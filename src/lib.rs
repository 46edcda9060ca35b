pub mod cli;
pub mod config;
pub mod converter;
pub mod error;

pub use config::Config;
pub use converter::{camel_case, convert, dot_case, kebab_case, CaseConverter, Scheme};
pub use error::ConvertError;

#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub error_count: usize,
    pub conversions: Vec<Conversion>,
}

impl BatchResult {
    pub fn from_conversions(conversions: Vec<Conversion>) -> Self {
        let error_count = conversions.iter().filter(|c| c.outcome.is_err()).count();
        Self {
            error_count,
            conversions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub input: String,
    pub outcome: Result<String, ConvertError>,
}
