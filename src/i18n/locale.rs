//! Locale codes: a closed set of standard languages plus validated custom codes.
//!
//! Two `LocaleCode`s are the same locale when their code strings match, whichever
//! variant they were built from.

use crate::i18n::I18nError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Standard ISO 639-1 languages known to the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardLocale {
    /// English
    En,
    /// Swahili
    Sw,
    /// French
    Fr,
}

impl StandardLocale {
    /// Every standard locale, in declaration order.
    pub const ALL: [StandardLocale; 3] = [StandardLocale::En, StandardLocale::Sw, StandardLocale::Fr];

    /// The two-letter code (e.g., "en", "sw").
    pub fn code(&self) -> &'static str {
        match self {
            StandardLocale::En => "en",
            StandardLocale::Sw => "sw",
            StandardLocale::Fr => "fr",
        }
    }

    /// Exact, case-sensitive match against the enumeration.
    pub fn from_code(code: &str) -> Option<StandardLocale> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }
}

/// A validated non-standard locale code, such as a dialect or an app-specific variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomLocale(String);

impl CustomLocale {
    pub const MIN_LEN: usize = 2;
    pub const MAX_LEN: usize = 10;

    /// Validate and wrap a custom code.
    ///
    /// # Errors
    /// `InvalidLocaleCode` if the code is blank or not 2-10 characters long.
    pub fn new(code: impl Into<String>) -> Result<Self, I18nError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(I18nError::InvalidLocaleCode {
                code,
                reason: "custom locale code cannot be blank",
            });
        }
        let len = code.chars().count();
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&len) {
            return Err(I18nError::InvalidLocaleCode {
                code,
                reason: "custom locale code must be 2-10 characters",
            });
        }
        Ok(Self(code))
    }

    /// The validated code string.
    pub fn code(&self) -> &str {
        &self.0
    }
}

/// Identity for a language variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LocaleCode {
    Standard(StandardLocale),
    Custom(CustomLocale),
}

impl LocaleCode {
    pub const EN: LocaleCode = LocaleCode::Standard(StandardLocale::En);
    pub const SW: LocaleCode = LocaleCode::Standard(StandardLocale::Sw);
    pub const FR: LocaleCode = LocaleCode::Standard(StandardLocale::Fr);

    /// Map a raw code to a locale: a standard locale if the code matches one
    /// exactly, otherwise a custom locale.
    ///
    /// # Errors
    /// `InvalidLocaleCode` if the code is not standard and fails custom validation.
    ///
    /// # Example
    /// ```ignore
    /// assert_eq!(LocaleCode::resolve("sw")?, LocaleCode::SW);
    /// assert!(matches!(LocaleCode::resolve("de")?, LocaleCode::Custom(_)));
    /// ```
    pub fn resolve(code: &str) -> Result<LocaleCode, I18nError> {
        match StandardLocale::from_code(code) {
            Some(standard) => Ok(LocaleCode::Standard(standard)),
            None => CustomLocale::new(code).map(LocaleCode::Custom),
        }
    }

    /// Build a custom locale directly, skipping the standard lookup.
    pub fn custom(code: impl Into<String>) -> Result<LocaleCode, I18nError> {
        CustomLocale::new(code).map(LocaleCode::Custom)
    }

    /// The code string this locale is identified by.
    pub fn code(&self) -> &str {
        match self {
            LocaleCode::Standard(standard) => standard.code(),
            LocaleCode::Custom(custom) => custom.code(),
        }
    }

    /// `true` for `en`, `sw` and `fr`.
    pub fn is_standard(&self) -> bool {
        matches!(self, LocaleCode::Standard(_))
    }
}

impl PartialEq for LocaleCode {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for LocaleCode {}

impl Hash for LocaleCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code().hash(state);
    }
}

impl PartialOrd for LocaleCode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LocaleCode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code().cmp(other.code())
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LocaleCode {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocaleCode::resolve(s)
    }
}

impl From<StandardLocale> for LocaleCode {
    fn from(standard: StandardLocale) -> Self {
        LocaleCode::Standard(standard)
    }
}

impl TryFrom<String> for LocaleCode {
    type Error = I18nError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        LocaleCode::resolve(&value)
    }
}

impl From<LocaleCode> for String {
    fn from(locale: LocaleCode) -> Self {
        locale.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // ==================== Standard Locale Tests ====================

    #[test]
    fn test_standard_codes() {
        assert_eq!(StandardLocale::En.code(), "en");
        assert_eq!(StandardLocale::Sw.code(), "sw");
        assert_eq!(StandardLocale::Fr.code(), "fr");
    }

    #[test]
    fn test_standard_from_code_is_case_sensitive() {
        assert_eq!(StandardLocale::from_code("en"), Some(StandardLocale::En));
        assert_eq!(StandardLocale::from_code("EN"), None);
    }

    // ==================== resolve Tests ====================

    #[test]
    fn test_resolve_standard() {
        let locale = LocaleCode::resolve("sw").expect("Should resolve");
        assert!(locale.is_standard());
        assert_eq!(locale, LocaleCode::SW);
    }

    #[test]
    fn test_resolve_unknown_becomes_custom() {
        let locale = LocaleCode::resolve("de").expect("Should resolve");
        assert!(matches!(locale, LocaleCode::Custom(ref c) if c.code() == "de"));
    }

    #[test]
    fn test_resolve_dialect() {
        let locale = LocaleCode::resolve("en-slang").expect("Should resolve");
        assert!(!locale.is_standard());
        assert_eq!(locale.code(), "en-slang");
    }

    #[test]
    fn test_resolve_rejects_empty() {
        let result = LocaleCode::resolve("");
        assert!(matches!(result, Err(I18nError::InvalidLocaleCode { .. })));
    }

    // ==================== Custom Validation Tests ====================

    #[test]
    fn test_custom_rejects_blank() {
        let err = CustomLocale::new("   ").unwrap_err();
        assert!(err.to_string().contains("blank"));
    }

    #[test]
    fn test_custom_rejects_single_char() {
        let err = CustomLocale::new("x").unwrap_err();
        assert!(err.to_string().contains("2-10"));
    }

    #[test]
    fn test_custom_rejects_too_long() {
        assert!(CustomLocale::new("abcdefghijk").is_err());
        assert!(CustomLocale::new("abcdefghij").is_ok());
    }

    // ==================== Identity Tests ====================

    #[test]
    fn test_equality_by_code_string() {
        let custom_en = LocaleCode::custom("en").expect("Should build");
        assert_eq!(custom_en, LocaleCode::EN);

        let mut set = HashSet::new();
        set.insert(LocaleCode::EN);
        assert!(set.contains(&custom_en));
    }

    #[test]
    fn test_ordering_by_code_string() {
        let mut locales = vec![LocaleCode::SW, LocaleCode::EN, LocaleCode::FR];
        locales.sort();
        let codes: Vec<_> = locales.iter().map(LocaleCode::code).collect();
        assert_eq!(codes, vec!["en", "fr", "sw"]);
    }

    #[test]
    fn test_display_and_from_str() {
        let locale: LocaleCode = "fr".parse().expect("Should parse");
        assert_eq!(locale.to_string(), "fr");
    }

    // ==================== Serde Tests ====================

    #[test]
    fn test_serializes_as_bare_code() {
        let json = serde_json::to_string(&LocaleCode::SW).unwrap();
        assert_eq!(json, "\"sw\"");
    }

    #[test]
    fn test_deserialize_applies_resolution_rule() {
        let locale: LocaleCode = serde_json::from_str("\"de\"").unwrap();
        assert!(!locale.is_standard());

        let invalid: Result<LocaleCode, _> = serde_json::from_str("\"x\"");
        assert!(invalid.is_err());
    }
}
