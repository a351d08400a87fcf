use thiserror::Error;

/// Errors raised by the runtime half of the crate.
///
/// Everything except `InvalidLocaleCode` and `RemoteBundle` is a programming or
/// content defect and is expected to abort the registration pass.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("resource with key '{key}' is already registered")]
    DuplicateKey { key: String },

    #[error("translations for '{key}' must include the default locale: {locale}")]
    MissingDefaultLocale { key: String, locale: String },

    #[error("resource '{key}' is missing translations for: {}", .missing.join(", "))]
    MissingLocales { key: String, missing: Vec<String> },

    #[error("translation for '{key}' in locale '{locale}' is null")]
    NullTranslation { key: String, locale: String },

    #[error("translation for '{key}' in locale '{locale}' is blank")]
    BlankTranslation { key: String, locale: String },

    #[error("resource '{key}' not registered")]
    UnregisteredResource { key: String },

    #[error("strings not initialized; call Strings::initialize() first")]
    UninitializedManager,

    #[error("resource '{key}' is not registered with payload type {expected}")]
    ResourceTypeMismatch { key: String, expected: &'static str },

    #[error("invalid locale code '{code}': {reason}")]
    InvalidLocaleCode { code: String, reason: &'static str },

    #[error("malformed remote translation bundle: {0}")]
    RemoteBundle(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_locales_message_lists_codes() {
        let err = I18nError::MissingLocales {
            key: "x".to_string(),
            missing: vec!["fr".to_string(), "sw".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "resource 'x' is missing translations for: fr, sw"
        );
    }

    #[test]
    fn test_duplicate_key_message() {
        let err = I18nError::DuplicateKey {
            key: "greeting".to_string(),
        };
        assert!(err.to_string().contains("'greeting'"));
    }
}
