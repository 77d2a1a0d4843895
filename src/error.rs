//! Errors for locale validation and registry definition.

use thiserror::Error;

/// Errors produced when validating a locale code or defining a registry.
///
/// The definition-time variants (`DuplicateCode`, `DefaultNotSupported`)
/// only occur while building a registry; once a registry exists they cannot
/// happen again. `UnknownCode` is the single runtime validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// A candidate code is not a member of the supported set.
    #[error("unknown locale code: '{0}'")]
    UnknownCode(String),

    /// A locale code appears more than once in a registry definition.
    #[error("duplicate locale code: '{0}'")]
    DuplicateCode(String),

    /// The configured default locale is not in the supported set.
    #[error("default locale '{0}' is not in the supported set")]
    DefaultNotSupported(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_code_message_names_the_code() {
        let err = LocaleError::UnknownCode("fr".to_string());
        assert_eq!(err.to_string(), "unknown locale code: 'fr'");
    }

    #[test]
    fn test_duplicate_code_message_names_the_code() {
        let err = LocaleError::DuplicateCode("en".to_string());
        assert_eq!(err.to_string(), "duplicate locale code: 'en'");
    }

    #[test]
    fn test_default_not_supported_message_names_the_code() {
        let err = LocaleError::DefaultNotSupported("de".to_string());
        assert_eq!(
            err.to_string(),
            "default locale 'de' is not in the supported set"
        );
    }
}
