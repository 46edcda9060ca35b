use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The input at an untyped boundary was not a string.
    #[error("Expected a string, but received {0}")]
    TypeKind(&'static str),

    #[error("Unknown case scheme: {0}")]
    UnknownScheme(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_kind_message() {
        let err = ConvertError::TypeKind("number");
        assert_eq!(err.to_string(), "Expected a string, but received number");
    }

    #[test]
    fn test_unknown_scheme_message() {
        let err = ConvertError::UnknownScheme("snake".to_string());
        assert_eq!(err.to_string(), "Unknown case scheme: snake");
    }
}
